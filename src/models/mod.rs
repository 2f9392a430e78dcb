//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus mask helpers
//! - [`Subnet`], [`OverflowWarning`] and [`Calculation`] - engine output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    get_cidr_mask, mask_to_prefix, parse_address, to_binary_string, to_dotted, Ipv4, MAX_LENGTH,
};
pub use subnet::{Calculation, OverflowWarning, Subnet, PRIVATE_BLOCKS};
