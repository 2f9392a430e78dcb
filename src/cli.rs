//! Command-line arguments of the `netcalc` binary.

use crate::config::{ColorChoice, Config};
use crate::output::RenderMode;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "netcalc",
    about = "IPv4 subnet calculator",
    disable_version_flag = true
)]
pub struct Cli {
    /// Output mode, overrides NETCALC_MODE
    #[arg(short, long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Same as --mode json
    #[arg(long, conflicts_with = "mode")]
    pub json: bool,

    /// When to use colors, overrides NETCALC_COLOR
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Print the manual page
    #[arg(long)]
    pub manual: bool,

    /// Print version and build information
    #[arg(short = 'V', long)]
    pub version: bool,

    /// `<ip>/<prefix>`, `<ip> <prefix>` or `<ip> <mask>`
    #[arg(allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    pub fn render_mode(&self, config: &Config) -> RenderMode {
        if self.json {
            RenderMode::Json
        } else {
            self.mode.unwrap_or(config.mode)
        }
    }

    pub fn color_choice(&self, config: &Config) -> ColorChoice {
        self.color.unwrap_or(config.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_tokens() {
        let cli = Cli::try_parse_from(["netcalc", "10.0.0.5", "255.255.255.0"]).unwrap();
        assert_eq!(cli.tokens, vec!["10.0.0.5", "255.255.255.0"]);
        assert_eq!(cli.render_mode(&Config::default()), RenderMode::Detailed);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config {
            mode: RenderMode::Plain,
            color: ColorChoice::Always,
            ..Config::default()
        };
        let cli = Cli::try_parse_from(["netcalc", "--json", "--color", "never", "10.0.0.5/8"])
            .unwrap();
        assert_eq!(cli.render_mode(&config), RenderMode::Json);
        assert_eq!(cli.color_choice(&config), ColorChoice::Never);

        let cli = Cli::try_parse_from(["netcalc", "-m", "binary", "10.0.0.5/8"]).unwrap();
        assert_eq!(cli.render_mode(&config), RenderMode::Binary);

        let cli = Cli::try_parse_from(["netcalc", "10.0.0.5/8"]).unwrap();
        assert_eq!(cli.render_mode(&config), RenderMode::Plain);
        assert_eq!(cli.color_choice(&config), ColorChoice::Always);
    }

    #[test]
    fn test_cli_negative_prefix_is_a_token() {
        let cli = Cli::try_parse_from(["netcalc", "10.0.0.1", "-1"]).unwrap();
        assert_eq!(cli.tokens, vec!["10.0.0.1", "-1"]);
    }

    #[test]
    fn test_cli_json_conflicts_with_mode() {
        assert!(Cli::try_parse_from(["netcalc", "--json", "-m", "plain", "10.0.0.5/8"]).is_err());
    }

    #[test]
    fn test_cli_no_tokens() {
        let cli = Cli::try_parse_from(["netcalc"]).unwrap();
        assert!(cli.tokens.is_empty());
        let cli = Cli::try_parse_from(["netcalc", "--manual"]).unwrap();
        assert!(cli.manual);
    }
}
