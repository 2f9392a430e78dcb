//! Turn command-line tokens into an `(address, prefix)` query.
//!
//! Accepted forms:
//! - `10.0.0.5/24`
//! - `10.0.0.5 24`
//! - `10.0.0.5 255.255.255.0`
//!
//! The prefix range and the address itself are checked later by
//! [`super::compute`], so `10.0.0.5/33` and `10.0.0.5/-1` pass through here.

use crate::error::NetcalcError;
use std::num::IntErrorKind;
use crate::models::mask_to_prefix;

/// A syntactically valid calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub address: String,
    pub prefix: i64,
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Calculate(Query),
    /// No tokens were given; show usage and exit cleanly.
    Help,
}

/// Any base-10 integer is accepted, values too large for `i64` saturate.
fn parse_prefix(token: &str) -> Result<i64, NetcalcError> {
    match token.parse::<i64>() {
        Ok(prefix) => Ok(prefix),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(NetcalcError::InvalidPrefix(token.to_string())),
        },
    }
}

/// Parse the positional tokens of one calculation.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> Result<Request, NetcalcError> {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    log::debug!("normalize({tokens:?})");

    let unexpected = || {
        NetcalcError::UnexpectedArguments(tokens.iter().map(|t| t.to_string()).collect())
    };
    let (address, prefix) = match tokens.as_slice() {
        [] => return Ok(Request::Help),
        [cidr] => {
            let (address, prefix) = cidr.split_once('/').ok_or_else(unexpected)?;
            (address, parse_prefix(prefix)?)
        }
        [address, mask] if mask.contains('.') => (*address, i64::from(mask_to_prefix(mask)?)),
        [address, prefix] => (*address, parse_prefix(prefix)?),
        _ => return Err(unexpected()),
    };

    Ok(Request::Calculate(Query {
        address: address.to_string(),
        prefix,
    }))
}
