//! Error kinds returned by the normalizer and the subnet engine.

use thiserror::Error;

/// Every failure the core can report. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetcalcError {
    #[error("invalid prefix: '{0}'")]
    InvalidPrefix(String),
    #[error("prefix length {0} is out of range 0-32")]
    InvalidPrefixRange(i64),
    #[error("invalid mask octet: '{0}'")]
    InvalidMaskOctet(String),
    #[error("invalid mask: '{0}' is not a contiguous run of leading ones")]
    InvalidMaskShape(String),
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),
    #[error("unexpected arguments: {0:?}")]
    UnexpectedArguments(Vec<String>),
}
