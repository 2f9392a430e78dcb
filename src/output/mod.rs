//! Output formatting for calculations.
//!
//! - [`terminal`] - plain, detailed and binary text listings
//! - [`json`] - JSON output
//! - [`text`] - usage, manual and version text

mod json;
mod terminal;
mod text;

pub use json::render_json;
pub use terminal::{format_field, format_warning, render_binary, render_detailed, render_plain};
pub use text::{version_text, MANUAL, USAGE};

use crate::models::Calculation;
use std::str::FromStr;

/// How a calculation is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    Plain,
    #[default]
    Detailed,
    Binary,
    Json,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderMode::Plain),
            "detailed" => Ok(RenderMode::Detailed),
            "binary" => Ok(RenderMode::Binary),
            "json" => Ok(RenderMode::Json),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}

/// Render with the selected mode.
///
/// Text modes leave the overflow warning to the caller, JSON embeds it.
pub fn render(mode: RenderMode, calc: &Calculation) -> Result<String, serde_json::Error> {
    let out = match mode {
        RenderMode::Plain => render_plain(calc),
        RenderMode::Detailed => render_detailed(calc),
        RenderMode::Binary => render_binary(calc),
        RenderMode::Json => render_json(calc)?,
    };
    Ok(out)
}
