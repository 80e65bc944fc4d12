//! Output file name patterns.
//!
//! A pattern holds exactly one integer placeholder in Python format syntax:
//! `{}`, `{0}`, `{:d}`, `{:3}`, `{:3d}` or `{:03d}`. `{{` and `}}` produce
//! literal braces.

use crate::config::ConfigError;

/// Padding applied to the formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    /// Right-aligned, padded with spaces.
    Spaces(usize),
    /// Padded with zeros after the sign.
    Zeros(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Number(Padding),
}

/// A parsed `name_pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    segments: Vec<Segment>,
}

impl NamePattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNamePattern` for unbalanced braces, an
    /// unsupported format spec, or a placeholder count other than one.
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidNamePattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(invalid("single `}` encountered")),
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(invalid("nested `{` in placeholder")),
                            Some(c) => field.push(c),
                            None => return Err(invalid("unclosed `{`")),
                        }
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let padding = parse_field(&field).ok_or_else(|| {
                        invalid(&format!("unsupported placeholder `{{{field}}}`"))
                    })?;
                    segments.push(Segment::Number(padding));
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        match segments.iter().filter(|s| matches!(s, Segment::Number(_))).count() {
            1 => Ok(Self { segments }),
            0 => Err(invalid("no integer placeholder such as `{}` or `{:02d}`")),
            _ => Err(invalid("more than one placeholder")),
        }
    }

    /// Formats the pattern for one output index.
    #[must_use]
    pub fn format(&self, index: i64) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Number(Padding::Spaces(width)) => {
                    let width = *width;
                    out.push_str(&format!("{index:>width$}"));
                }
                Segment::Number(Padding::Zeros(width)) => {
                    let width = *width;
                    out.push_str(&format!("{index:0width$}"));
                }
            }
        }

        out
    }
}

/// Parses the inside of a placeholder: `[0][:[0][width][d]]`.
fn parse_field(field: &str) -> Option<Padding> {
    let (position, spec) = field.split_once(':').unwrap_or((field, ""));
    if !position.is_empty() && position != "0" {
        return None;
    }

    let spec = spec.strip_suffix('d').unwrap_or(spec);
    if spec.is_empty() {
        return Some(Padding::Spaces(0));
    }
    if !spec.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let width = spec.parse().ok()?;
    if spec.len() > 1 && spec.starts_with('0') {
        Some(Padding::Zeros(width))
    } else {
        Some(Padding::Spaces(width))
    }
}
