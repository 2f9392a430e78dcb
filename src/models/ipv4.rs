//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an address paired with a prefix length, along with
//! the mask arithmetic the subnet engine is built on.

use crate::error::NetcalcError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask for a prefix that is already known to be in range.
///
/// `u32 << 32` overflows, so the zero prefix gets its own branch.
fn prefix_mask(len: u8) -> u32 {
    if len == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - len.min(MAX_LENGTH))
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netcalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, NetcalcError> {
    if len > MAX_LENGTH {
        Err(NetcalcError::InvalidPrefixRange(i64::from(len)))
    } else {
        Ok(prefix_mask(len))
    }
}

/// Parse a dotted-quad literal into its 32-bit big-endian value.
///
/// IPv6 literals, out of range components and a wrong component count are
/// all rejected.
pub fn parse_address(addr: &str) -> Result<u32, NetcalcError> {
    Ipv4Addr::from_str(addr)
        .map(u32::from)
        .map_err(|_| NetcalcError::InvalidAddress(addr.to_string()))
}

/// Canonical dotted-quad text for a 32-bit value.
pub fn to_dotted(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// Binary octets joined by dots, e.g. `11111111.11111111.11111111.00000000`.
pub fn to_binary_string(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Convert a dotted mask (e.g. "255.255.255.0") to a prefix length.
///
/// The mask must have exactly four octets in 0-255 and its bits must be a
/// run of ones followed only by zeros.
pub fn mask_to_prefix(mask: &str) -> Result<u8, NetcalcError> {
    let parts: Vec<&str> = mask.split('.').collect();
    if parts.len() != 4 {
        return Err(NetcalcError::InvalidMaskShape(mask.to_string()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = part
            .parse::<u8>()
            .map_err(|_| NetcalcError::InvalidMaskOctet(part.to_string()))?;
    }
    let bits = u32::from_be_bytes(octets);
    let ones = bits.leading_ones() as u8;
    if bits != prefix_mask(ones) {
        log::debug!("mask {mask} = {bits:#010X} is not contiguous");
        return Err(NetcalcError::InvalidMaskShape(mask.to_string()));
    }
    Ok(ones)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// ```
    /// use netcalc::models::Ipv4;
    /// let net = Ipv4::new("172.16.0.0/12").unwrap();
    /// assert_eq!(net.hi().to_string(), "172.31.255.255");
    /// assert!(Ipv4::new("172.16.0.0/-1").is_err());
    /// ```
    pub fn new(addr_cidr: &str) -> Result<Ipv4, NetcalcError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| NetcalcError::InvalidAddress(addr_cidr.to_string()))?;
        let addr = Ipv4Addr::from(parse_address(addr)?);
        let mask: i64 = len
            .parse()
            .map_err(|_| NetcalcError::InvalidPrefix(len.to_string()))?;
        let mask = u8::try_from(mask)
            .ok()
            .filter(|m| *m <= MAX_LENGTH)
            .ok_or(NetcalcError::InvalidPrefixRange(mask))?;
        Ok(Ipv4 { addr, mask })
    }

    /// Subnet mask as u32.
    pub fn netmask(&self) -> u32 {
        prefix_mask(self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !self.netmask())
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
