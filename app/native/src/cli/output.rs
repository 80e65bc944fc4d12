//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - JSON syntax highlighting
//! - Geometry formatting for the layout table

use colored::Colorize;

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (bold)
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{}", highlight_json(&json));
}

/// Colors a pretty-printed JSON document.
///
/// Works on the text rather than the value so the layout of
/// `to_string_pretty` is kept. A string is a key when the next
/// non-whitespace character is a colon.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let mut out = String::with_capacity(json.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '"' => {
                let end = string_end(&chars, i);
                let token: String = chars[i..end].iter().collect();
                let is_key = chars[end..].iter().find(|c| !c.is_whitespace()) == Some(&':');
                let colored = if is_key { token.cyan() } else { token.green() };
                out.push_str(&colored.to_string());
                i = end;
            }
            '{' | '}' | '[' | ']' => {
                out.push_str(&ch.to_string().white().bold().to_string());
                i += 1;
            }
            ':' | ',' => {
                out.push_str(&ch.to_string().white().to_string());
                i += 1;
            }
            c if c == '-' || c.is_ascii_alphanumeric() => {
                let end = chars[i..]
                    .iter()
                    .position(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.')))
                    .map_or(chars.len(), |offset| i + offset);
                let token: String = chars[i..end].iter().collect();
                let colored = match token.as_str() {
                    "true" | "false" | "null" => token.magenta(),
                    _ => token.yellow(),
                };
                out.push_str(&colored.to_string());
                i = end;
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out
}

/// Index one past the closing quote of the string starting at `start`.
fn string_end(chars: &[char], start: usize) -> usize {
    let mut escaped = false;
    for (offset, &c) in chars[start + 1..].iter().enumerate() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return start + offset + 2,
            _ => {}
        }
    }
    chars.len()
}

/// Formats a size as `WIDTHxHEIGHT`.
#[must_use]
pub fn format_size(width: u32, height: u32) -> String { format!("{width}x{height}") }

/// Formats a position as `X, Y`.
#[must_use]
pub fn format_position(x: u32, y: u32) -> String { format!("{x}, {y}") }
