//! Subnet arithmetic for one `(address, prefix)` pair.

use super::normalize::Query;
use crate::error::NetcalcError;
use crate::models::{
    get_cidr_mask, parse_address, Calculation, OverflowWarning, Subnet, MAX_LENGTH,
    PRIVATE_BLOCKS,
};
use std::net::Ipv4Addr;

/// Compute every derived field of the subnet containing `address`.
///
/// Fails on a prefix outside 0-32 or an address that is not a dotted-quad
/// literal. The private block check only annotates the result.
///
/// # Examples
/// ```
/// use netcalc::processing::compute;
/// let calc = compute("192.168.1.10", 24).unwrap();
/// assert_eq!(calc.subnet.total_hosts, 254);
/// assert_eq!(calc.subnet.network.to_string(), "192.168.1.0");
/// assert!(calc.overflow.is_none());
/// ```
pub fn compute(address: &str, prefix: i64) -> Result<Calculation, NetcalcError> {
    let prefix = u8::try_from(prefix)
        .ok()
        .filter(|p| *p <= MAX_LENGTH)
        .ok_or(NetcalcError::InvalidPrefixRange(prefix))?;
    let addr = parse_address(address)?;
    let mask = get_cidr_mask(prefix)?;

    let network = addr & mask;
    let broadcast = network | !mask;
    let (first, last, total_hosts) = match prefix {
        // RFC 3021 point-to-point link, both addresses usable
        31 => (network, broadcast, 2),
        32 => (network, network, 1),
        _ => (
            network + 1,
            broadcast - 1,
            (1u64 << (MAX_LENGTH - prefix)) - 2,
        ),
    };

    let subnet = Subnet {
        address: Ipv4Addr::from(addr),
        prefix,
        mask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(!mask),
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        first: Ipv4Addr::from(first),
        last: Ipv4Addr::from(last),
        total_hosts,
    };
    log::debug!("compute({address}/{prefix}) = {subnet:?}");

    Ok(Calculation {
        subnet,
        overflow: private_overflow(&subnet),
    })
}

/// [`compute`] for a query produced by [`super::normalize`].
pub fn compute_query(query: &Query) -> Result<Calculation, NetcalcError> {
    compute(&query.address, query.prefix)
}

/// Check the subnet against the private block holding its input address.
///
/// Only the first block containing the address is considered. Public
/// addresses never produce a warning.
pub fn private_overflow(subnet: &Subnet) -> Option<OverflowWarning> {
    let block = PRIVATE_BLOCKS
        .iter()
        .find(|block| block.contains(subnet.address))?;
    if subnet.network < block.lo() || subnet.broadcast > block.hi() {
        let warning = OverflowWarning {
            subnet: subnet.cidr(),
            block: *block,
        };
        log::warn!("{warning}");
        return Some(warning);
    }
    None
}
