//! Text renderers for a [`Calculation`].
//!
//! The `colored` crate decides per process whether escape codes are
//! emitted, see [`crate::config::ColorChoice`].

use crate::models::{to_binary_string, Calculation, OverflowWarning, Subnet};
use colored::Colorize;

/// Column width of the labels in detailed and binary output.
const LABEL_WIDTH: usize = 25;

/// Format a label, left-aligned and bold, followed by its value.
///
/// # Arguments
/// * `label` - The text before the value
/// * `value` - The value to print
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let padded = format!("{label:<width$}");
    format!("{} {}", padded.bold(), value.to_string().green())
}

fn hex(bits: impl Into<u32>) -> String {
    format!("0x{:08X}", bits.into())
}

/// Overflow annotation, one line, no trailing newline.
pub fn format_warning(warning: &OverflowWarning) -> String {
    format!("{} {warning}", "Warning:".on_red())
}

/// The short listing of the simple calculator.
pub fn render_plain(calc: &Calculation) -> String {
    let s = &calc.subnet;
    [
        format!("Input IP: {}", s.address),
        format!("Netmask: {}", s.mask),
        format!("Network Address: {}", s.network),
        format!("First Usable IP: {}", s.first),
        format!("Last Usable IP: {}", s.last),
        format!("Broadcast Address: {}", s.broadcast),
        format!("Total Valid Hosts: {}", s.total_hosts),
    ]
    .join("\n")
}

fn detailed_rows(s: &Subnet) -> Vec<(&'static str, String)> {
    vec![
        ("Input IP:", s.address.to_string()),
        ("Netmask:", format!("{} (/ {})", s.mask, s.prefix)),
        ("Mask (hex):", hex(s.mask)),
        ("Wildcard Mask:", s.wildcard.to_string()),
        ("Network Address:", s.cidr().to_string()),
        ("Broadcast Address:", s.broadcast.to_string()),
        ("Usable Host Range:", format!("{} - {}", s.first, s.last)),
        ("Total Usable Hosts:", s.total_hosts.to_string()),
    ]
}

fn render_rows(rows: Vec<(&'static str, String)>) -> String {
    rows.into_iter()
        .map(|(label, value)| format_field(label, value, LABEL_WIDTH))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Aligned listing with hex mask and wildcard.
pub fn render_detailed(calc: &Calculation) -> String {
    render_rows(detailed_rows(&calc.subnet))
}

/// Detailed listing plus binary and hex forms of the main values.
pub fn render_binary(calc: &Calculation) -> String {
    let s = &calc.subnet;
    let mut rows = detailed_rows(s);
    for (label, addr) in [
        ("Address (bin):", s.address),
        ("Netmask (bin):", s.mask),
        ("Network (bin):", s.network),
        ("Wildcard (bin):", s.wildcard),
    ] {
        rows.push((label, format!("{} {}", to_binary_string(addr.into()), hex(addr))));
    }
    render_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::compute;

    #[test]
    fn test_format_field_pads_label() {
        colored::control::set_override(false);
        assert_eq!(format_field("Mask:", "255.0.0.0", 8), "Mask:    255.0.0.0");
        assert_eq!(format_field("Long label:", 42, 4), "Long label: 42");
    }

    #[test]
    fn test_render_plain() {
        let out = render_plain(&compute("192.168.0.1", 24).unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Input IP: 192.168.0.1");
        assert_eq!(lines[3], "First Usable IP: 192.168.0.1");
        assert_eq!(lines[6], "Total Valid Hosts: 254");
    }

    #[test]
    fn test_render_detailed() {
        let out = render_detailed(&compute("10.0.0.5", 20).unwrap());
        assert!(out.contains("255.255.240.0 (/ 20)"));
        assert!(out.contains("0xFFFFF000"));
        assert!(out.contains("0.0.15.255"));
        assert!(out.contains("10.0.0.0/20"));
        assert!(out.contains("10.0.0.1 - 10.0.15.254"));
        assert!(out.contains("4094"));
    }

    #[test]
    fn test_hex_is_zero_padded() {
        let out = render_detailed(&compute("10.0.0.5", 0).unwrap());
        assert!(out.contains("0x00000000"));
        assert_eq!(hex(0x00FF_0000u32), "0x00FF0000");
    }

    #[test]
    fn test_render_binary() {
        let out = render_binary(&compute("10.0.0.5", 24).unwrap());
        assert_eq!(out.lines().count(), 12);
        assert!(out.contains("11111111.11111111.11111111.00000000 0xFFFFFF00"));
        assert!(out.contains("00001010.00000000.00000000.00000101 0x0A000005"));
    }

    #[test]
    fn test_format_warning() {
        let calc = compute("172.31.0.1", 8).unwrap();
        let out = format_warning(&calc.overflow.unwrap());
        assert!(out.ends_with("Subnet 172.0.0.0/8 extends outside private block 172.16.0.0/12"));
    }
}
