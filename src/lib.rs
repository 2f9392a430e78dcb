// cargo watch -x 'fmt' -x 'run -- 192.168.1.10/24'

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Cli;
use config::{Config, BUILD_INFO};
use output::{format_warning, render, version_text, RenderMode, MANUAL, USAGE};
use processing::{compute_query, normalize, Request};
use std::error::Error;

pub use error::NetcalcError;
pub use processing::{compute, Query};

/// What the binary should print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Usage, manual or version text.
    Text(String),
    Calculated {
        output: String,
        /// Overflow annotation for text modes, printed on stderr.
        warning: Option<String>,
    },
}

/// Dispatch one invocation of the binary.
pub fn run(cli: &Cli, config: &Config) -> Result<Outcome, Box<dyn Error>> {
    if cli.manual {
        return Ok(Outcome::Text(MANUAL.to_string()));
    }
    if cli.version {
        return Ok(Outcome::Text(version_text(&BUILD_INFO)));
    }

    let query = match normalize(&cli.tokens)? {
        Request::Help => return Ok(Outcome::Text(USAGE.to_string())),
        Request::Calculate(query) => query,
    };
    let mode = cli.render_mode(config);
    log::info!("Calculating {}/{} ({mode:?})", query.address, query.prefix);

    let calc = compute_query(&query)?;
    let output = render(mode, &calc)?;
    let warning = match mode {
        RenderMode::Json => None,
        _ => calc.overflow.as_ref().map(format_warning),
    };
    Ok(Outcome::Calculated { output, warning })
}
