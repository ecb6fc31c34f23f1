//! IPv4 network in CIDR notation and the mask arithmetic behind it.
//!
//! [`Cidr`] pairs an address with a validated prefix length. [`get_cidr_mask`]
//! is the same mask arithmetic for a bare prefix and backs the codec.

use crate::error::NetError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Shortest prefix accepted anywhere in the crate.
pub const MIN_LENGTH: u8 = 1;

/// Check that `prefix` lies in [1,32].
pub fn validate_prefix(prefix: u8) -> Result<u8, NetError> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&prefix) {
        Ok(prefix)
    } else {
        Err(NetError::InvalidPrefixLength(prefix.into()))
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netify::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, NetError> {
    Ok(mask_bits(validate_prefix(len)?))
}

// len must already be in [1,32].
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    ((u32::MAX as u64 >> right_len) << right_len) as u32
}

/// IPv4 network in CIDR notation, e.g. `192.168.1.0/24`.
///
/// The prefix is validated on construction, so every method is infallible.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    /// Build a [`Cidr`] from parts, validating the prefix.
    pub fn from_parts(addr: Ipv4Addr, prefix: u8) -> Result<Cidr, NetError> {
        Ok(Cidr {
            addr,
            prefix: validate_prefix(prefix)?,
        })
    }

    /// Create a new [`Cidr`] from a string such as `"10.0.0.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Cidr, NetError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| NetError::InvalidAddressFormat(addr_cidr.to_string()))?;
        let addr = super::codec::parse_address(addr)?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetError::InvalidMask(prefix.to_string()));
        }
        // any number too large for u32 is out of range all the same
        let value = prefix.parse::<u32>().unwrap_or(u32::MAX);
        let prefix = u8::try_from(value).map_err(|_| NetError::InvalidPrefixLength(value))?;
        Cidr::from_parts(addr, prefix)
    }

    /// The IPv4 address, not necessarily aligned to the prefix.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (1-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.prefix))
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.prefix))
    }

    /// The same block with its address cut down to the network address.
    pub fn network(&self) -> Cidr {
        Cidr {
            addr: self.lo(),
            prefix: self.prefix,
        }
    }

    /// True when `addr` is already the network address of the block.
    pub fn is_aligned(&self) -> bool {
        self.addr == self.lo()
    }

    /// Subnet mask as a dotted quad.
    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
