//! Conversions between dotted-quad text, 32-bit binary strings, prefix
//! lengths and dotted-quad masks.

use super::cidr::get_cidr_mask;
use crate::error::NetError;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Four groups of one to three ASCII digits separated by dots.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();
/// Exactly 32 characters of '0' or '1'.
static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

fn get_binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| Regex::new(r"^[01]{32}$").expect("Invalid Regex"))
}

/// Parse a dotted-quad address.
///
/// Every octet must be plain decimal in [0,255]. Signs, whitespace and
/// redundant leading zeros are rejected so the text maps losslessly to the
/// parsed value.
pub fn parse_address(address: &str) -> Result<Ipv4Addr, NetError> {
    let invalid = || NetError::InvalidAddressFormat(address.to_string());
    let caps = get_dotted_quad_regex()
        .captures(address)
        .ok_or_else(invalid)?;

    let mut octets = [0u8; 4];
    for (octet, cap) in octets.iter_mut().zip(caps.iter().skip(1)) {
        let text = cap.ok_or_else(invalid)?.as_str();
        if text.len() > 1 && text.starts_with('0') {
            return Err(invalid());
        }
        *octet = text.parse().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Encode a dotted-quad address as 32 binary digits, most significant octet first.
///
/// ```
/// use netify::models::encode_binary;
/// assert_eq!(
///     encode_binary("192.168.1.1").unwrap(),
///     "11000000101010000000000100000001"
/// );
/// ```
pub fn encode_binary(address: &str) -> Result<String, NetError> {
    let addr = parse_address(address)?;
    log::trace!("encode_binary({address})");
    Ok(format!("{:032b}", u32::from(addr)))
}

/// Parse 32 binary digits into an address.
pub fn parse_binary(bits: &str) -> Result<Ipv4Addr, NetError> {
    if !get_binary_regex().is_match(bits) {
        return Err(NetError::InvalidBinaryLength(bits.to_string()));
    }
    let value = u32::from_str_radix(bits, 2)
        .map_err(|_| NetError::InvalidBinaryLength(bits.to_string()))?;
    Ok(Ipv4Addr::from(value))
}

/// Decode 32 binary digits back to dotted-quad text.
pub fn decode_binary(bits: &str) -> Result<String, NetError> {
    log::trace!("decode_binary({bits})");
    Ok(parse_binary(bits)?.to_string())
}

/// Dotted-quad mask for a prefix length in [1,32].
pub fn prefix_to_mask(prefix: u8) -> Result<String, NetError> {
    Ok(prefix_to_mask_addr(prefix)?.to_string())
}

/// Mask for a prefix length in [1,32] as an [`Ipv4Addr`].
pub fn prefix_to_mask_addr(prefix: u8) -> Result<Ipv4Addr, NetError> {
    Ok(Ipv4Addr::from(get_cidr_mask(prefix)?))
}

/// Prefix length of a contiguous dotted-quad mask.
///
/// Fails with [`NetError::InvalidMask`] for malformed text, a zero mask, or
/// any 0 bit that is followed by a 1 bit.
pub fn mask_to_prefix(mask: &str) -> Result<u8, NetError> {
    let addr = parse_address(mask).map_err(|_| NetError::InvalidMask(mask.to_string()))?;
    mask_addr_to_prefix(addr).map_err(|_| NetError::InvalidMask(mask.to_string()))
}

/// Prefix length of a contiguous mask given as an [`Ipv4Addr`].
pub fn mask_addr_to_prefix(mask: Ipv4Addr) -> Result<u8, NetError> {
    let bits = u32::from(mask);
    let set = bits.count_ones();
    // Contiguous iff all set bits are leading bits.
    if set == 0 || bits.leading_ones() != set {
        return Err(NetError::InvalidMask(mask.to_string()));
    }
    Ok(set as u8)
}
