//! Error taxonomy for the addressing core.

/// Errors returned by the address codec, network calculator and subnet divider.
///
/// Each error is local to one call. Computations are deterministic, so retrying
/// with the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    /// Not a dotted quad of four decimal octets in [0,255].
    #[error("invalid IP address format: '{0}'")]
    InvalidAddressFormat(String),
    /// Not exactly 32 characters of '0' and '1'.
    #[error("invalid binary format: '{0}' is not 32 bits of 0/1")]
    InvalidBinaryLength(String),
    /// Prefix length outside [1,32].
    #[error("invalid subnet mask length: /{0} (expected 1-32)")]
    InvalidPrefixLength(u32),
    /// Mask with no set bits, a malformed quad, or a 0 bit followed by a 1 bit.
    #[error("invalid subnet mask: '{0}'")]
    InvalidMask(String),
    /// Well-formed address with no address class (first octet 0).
    #[error("invalid IP address: '{0}' has no address class")]
    InvalidAddress(String),
    /// More hosts per subnet than the base network holds.
    #[error("hosts_per_subnet {hosts} exceeds the {available} addresses available in the network")]
    SubnetCapacityExceeded { hosts: u64, available: u64 },
    /// Host requirement does not map onto a prefix inside the base network.
    #[error("cannot divide a /{base_prefix} network into subnets of {hosts} hosts")]
    SubnetSizeInfeasible { hosts: u64, base_prefix: u8 },
}
