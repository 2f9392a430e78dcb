//! Usage guide, manual page and version banner.

use crate::config::BuildInfo;

pub const USAGE: &str = "\
netcalc - IPv4 subnet calculator

Usage:
  netcalc <ip>/<prefix>
  netcalc <ip> <prefix>
  netcalc <ip> <mask>

Examples:
  netcalc 192.168.0.1/24
  netcalc 10.0.0.5 255.255.255.0

Options:
  -m, --mode <MODE>   plain, detailed, binary or json
      --json          same as --mode json
      --color <WHEN>  auto, always or never
      --manual        show the manual page
  -V, --version       show version and build information
  -h, --help          show this help message
";

pub const MANUAL: &str = "\
NETCALC(1)                     User Commands                    NETCALC(1)

NAME
    netcalc - IPv4 subnet calculator

SYNOPSIS
    netcalc [options] <ip>/<prefix>
    netcalc [options] <ip> <prefix|mask>

DESCRIPTION
    netcalc computes the network address, broadcast address, usable host
    range, host count and wildcard mask of the subnet holding the given
    IPv4 address.

    A dotted mask must be a contiguous run of ones, e.g. 255.255.240.0.
    A /31 has two usable addresses (RFC 3021) and a /32 has one.

    When the address lies in 10.0.0.0/8, 172.16.0.0/12 or 192.168.0.0/16
    and the computed subnet reaches outside that block, a warning is
    printed. The calculation still succeeds.

OUTPUT MODES
    plain      short listing
    detailed   aligned listing with hex mask and wildcard (default)
    binary     detailed listing plus binary and hex forms
    json       machine readable object

ENVIRONMENT
    NETCALC_MODE         default output mode
    NETCALC_COLOR        auto, always or never
    NETCALC_LOG_CONFIG   log4rs configuration file (default log4rs.yml)
    NO_COLOR             disable colors when set

EXIT STATUS
    0 on success or help, 1 on invalid input.

EXAMPLES
    netcalc 192.168.1.10/24
    netcalc 10.0.0.1 8
    netcalc --mode binary 172.16.4.1 255.255.252.0
";

/// `netcalc 0.1.0` followed by the build metadata lines.
pub fn version_text(info: &BuildInfo) -> String {
    format!(
        "netcalc {version}\n  Build Time : {build_time}\n  Git Commit : {git_commit}\n  Git Branch : {git_branch}",
        version = info.version,
        build_time = info.build_time,
        git_commit = info.git_commit,
        git_branch = info.git_branch,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text() {
        let info = BuildInfo {
            version: "1.2.3",
            build_time: "2024-01-01T00:00:00Z",
            git_commit: "abc1234",
            git_branch: "main",
        };
        let text = version_text(&info);
        assert!(text.starts_with("netcalc 1.2.3\n"));
        assert!(text.contains("Git Commit : abc1234"));
    }
}
