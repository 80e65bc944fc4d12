#![allow(clippy::multiple_crate_versions)]

//! Canvaswall command-line entry point.
//!
//! Any error is printed to stderr and the process exits with status 1.

fn main() {
    if let Err(err) = canvaswall_lib::cli::run() {
        eprintln!("canvaswall: {err}");
        std::process::exit(1);
    }
}
