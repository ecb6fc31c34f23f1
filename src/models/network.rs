//! Network calculator: network and broadcast addresses, host counts and
//! address classification for an (address, mask) pair.

use super::cidr::{Cidr, MAX_LENGTH};
use super::codec::{mask_to_prefix, parse_address};
use crate::error::NetError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Usable host addresses in a block with the given prefix.
///
/// `2^n - 2` where `n` is the host bit count. /31 reports 2 (point-to-point
/// links, RFC 3021) and /32 reports 1 (a single host route).
pub fn usable_hosts(prefix: u8) -> Result<u64, NetError> {
    let prefix = super::cidr::validate_prefix(prefix)?;
    let host_bits = MAX_LENGTH - prefix;
    Ok(match host_bits {
        0 => 1,
        1 => 2,
        n => (1u64 << n) - 2,
    })
}

/// Public/private/loopback classification of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpStatus {
    Loopback,
    Private,
    Public,
}

impl IpStatus {
    /// Classify `addr`. Only `127.0.0.1` counts as loopback.
    pub fn of(addr: Ipv4Addr) -> IpStatus {
        if addr == Ipv4Addr::LOCALHOST {
            IpStatus::Loopback
        } else if addr.is_private() {
            // 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16
            IpStatus::Private
        } else {
            IpStatus::Public
        }
    }
}

impl fmt::Display for IpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IpStatus::Loopback => "Loopback",
            IpStatus::Private => "Private",
            IpStatus::Public => "Public",
        };
        f.write_str(s)
    }
}

/// Classful addressing class, decided by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental.
    E,
}

impl IpClass {
    /// Class of `addr`; first octet 0 has none.
    pub fn of(addr: Ipv4Addr) -> Result<IpClass, NetError> {
        match addr.octets()[0] {
            1..=127 => Ok(IpClass::A),
            128..=191 => Ok(IpClass::B),
            192..=223 => Ok(IpClass::C),
            224..=239 => Ok(IpClass::D),
            240..=255 => Ok(IpClass::E),
            0 => Err(NetError::InvalidAddress(addr.to_string())),
        }
    }

    /// Long label as shown in reports, e.g. `"D (Multicast)"`.
    pub fn label(&self) -> &'static str {
        match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D (Multicast)",
            IpClass::E => "E (Experimental)",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IpClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// An address together with its mask. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkCalculator {
    cidr: Cidr,
}

impl NetworkCalculator {
    /// Build from a dotted address and a dotted mask.
    pub fn new(address: &str, subnet_mask: &str) -> Result<NetworkCalculator, NetError> {
        let addr = parse_address(address)?;
        let prefix = mask_to_prefix(subnet_mask)?;
        Ok(NetworkCalculator {
            cidr: Cidr::from_parts(addr, prefix)?,
        })
    }

    /// Build from a dotted address and a prefix length.
    pub fn with_prefix(address: &str, prefix: u8) -> Result<NetworkCalculator, NetError> {
        let addr = parse_address(address)?;
        Ok(NetworkCalculator {
            cidr: Cidr::from_parts(addr, prefix)?,
        })
    }

    /// The address and prefix this calculator was built from.
    pub fn cidr(&self) -> Cidr {
        self.cidr
    }

    pub fn address(&self) -> Ipv4Addr {
        self.cidr.addr()
    }

    pub fn prefix(&self) -> u8 {
        self.cidr.prefix()
    }

    pub fn subnet_mask(&self) -> String {
        self.cidr.mask().to_string()
    }

    /// Address AND mask.
    pub fn network_address(&self) -> String {
        self.cidr.lo().to_string()
    }

    /// Address with every host bit set.
    pub fn broadcast_address(&self) -> String {
        self.cidr.hi().to_string()
    }

    pub fn usable_host_count(&self) -> u64 {
        // prefix was validated when the calculator was built
        usable_hosts(self.cidr.prefix()).unwrap_or(0)
    }

    pub fn ip_status(&self) -> IpStatus {
        IpStatus::of(self.cidr.addr())
    }

    pub fn ip_class(&self) -> Result<IpClass, NetError> {
        IpClass::of(self.cidr.addr())
    }
}

/// Network address of `address` under the dotted `mask`.
pub fn network_address(address: &str, mask: &str) -> Result<String, NetError> {
    Ok(NetworkCalculator::new(address, mask)?.network_address())
}

/// Broadcast address of `address` under the dotted `mask`.
pub fn broadcast_address(address: &str, mask: &str) -> Result<String, NetError> {
    Ok(NetworkCalculator::new(address, mask)?.broadcast_address())
}

/// Usable hosts behind the dotted `mask`.
pub fn usable_host_count(mask: &str) -> Result<u64, NetError> {
    usable_hosts(mask_to_prefix(mask)?)
}

/// Loopback/private/public status of a dotted address.
pub fn ip_status(address: &str) -> Result<IpStatus, NetError> {
    Ok(IpStatus::of(parse_address(address)?))
}

/// Address class of a dotted address.
pub fn ip_class(address: &str) -> Result<IpClass, NetError> {
    IpClass::of(parse_address(address)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_192_168_1_10() {
        let calc = NetworkCalculator::new("192.168.1.10", "255.255.255.0").unwrap();
        assert_eq!(calc.network_address(), "192.168.1.0");
        assert_eq!(calc.broadcast_address(), "192.168.1.255");
        assert_eq!(calc.usable_host_count(), 254);
        assert_eq!(calc.ip_status(), IpStatus::Private);
        assert_eq!(calc.ip_class().unwrap(), IpClass::C);
        assert_eq!(calc.prefix(), 24);
        assert_eq!(calc.subnet_mask(), "255.255.255.0");
    }

    #[test]
    fn test_calculator_with_prefix() {
        let calc = NetworkCalculator::with_prefix("172.20.33.7", 12).unwrap();
        assert_eq!(calc.network_address(), "172.16.0.0");
        assert_eq!(calc.broadcast_address(), "172.31.255.255");
        assert_eq!(calc.usable_host_count(), (1 << 20) - 2);
        assert_eq!(calc.ip_class().unwrap(), IpClass::B);
        assert_eq!(
            NetworkCalculator::with_prefix("172.20.33.7", 0),
            Err(NetError::InvalidPrefixLength(0))
        );
    }

    #[test]
    fn test_calculator_invalid_inputs() {
        assert!(matches!(
            NetworkCalculator::new("192.168.1", "255.255.255.0"),
            Err(NetError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            NetworkCalculator::new("192.168.1.10", "255.0.255.0"),
            Err(NetError::InvalidMask(_))
        ));
        assert!(matches!(
            network_address("192.168.1.10", "0.0.0.0"),
            Err(NetError::InvalidMask(_))
        ));
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(
            network_address("10.20.30.40", "255.255.240.0").unwrap(),
            "10.20.16.0"
        );
        assert_eq!(
            broadcast_address("10.20.30.40", "255.255.240.0").unwrap(),
            "10.20.31.255"
        );
        assert_eq!(usable_host_count("255.255.255.0").unwrap(), 254);
        assert_eq!(usable_host_count("255.255.255.252").unwrap(), 2);
        assert!(usable_host_count("255.255.0.255").is_err());
    }

    #[test]
    fn test_usable_hosts_edges() {
        assert_eq!(usable_hosts(1).unwrap(), (1u64 << 31) - 2);
        assert_eq!(usable_hosts(30).unwrap(), 2);
        assert_eq!(usable_hosts(31).unwrap(), 2);
        assert_eq!(usable_hosts(32).unwrap(), 1);
        assert!(usable_hosts(0).is_err());
        assert!(usable_hosts(33).is_err());
    }

    #[test]
    fn test_ip_status() {
        assert_eq!(ip_status("127.0.0.1").unwrap(), IpStatus::Loopback);
        assert_eq!(ip_status("10.1.2.3").unwrap(), IpStatus::Private);
        assert_eq!(ip_status("172.16.0.1").unwrap(), IpStatus::Private);
        assert_eq!(ip_status("172.31.255.255").unwrap(), IpStatus::Private);
        assert_eq!(ip_status("172.32.0.1").unwrap(), IpStatus::Public);
        assert_eq!(ip_status("172.15.0.1").unwrap(), IpStatus::Public);
        assert_eq!(ip_status("192.168.0.1").unwrap(), IpStatus::Private);
        assert_eq!(ip_status("192.169.0.1").unwrap(), IpStatus::Public);
        assert_eq!(ip_status("8.8.8.8").unwrap(), IpStatus::Public);
        assert_eq!(ip_status("127.0.0.2").unwrap(), IpStatus::Public);
        assert!(ip_status("localhost").is_err());
    }

    #[test]
    fn test_ip_class() {
        assert_eq!(ip_class("10.0.0.1").unwrap(), IpClass::A);
        assert_eq!(ip_class("127.0.0.1").unwrap(), IpClass::A);
        assert_eq!(ip_class("128.0.0.1").unwrap(), IpClass::B);
        assert_eq!(ip_class("191.255.0.1").unwrap(), IpClass::B);
        assert_eq!(ip_class("200.1.1.1").unwrap(), IpClass::C);
        assert_eq!(ip_class("224.0.0.251").unwrap(), IpClass::D);
        assert_eq!(ip_class("240.0.0.1").unwrap(), IpClass::E);
        assert_eq!(ip_class("255.255.255.255").unwrap(), IpClass::E);
        assert_eq!(
            ip_class("0.1.2.3"),
            Err(NetError::InvalidAddress("0.1.2.3".to_string()))
        );
        assert!(matches!(
            ip_class("300.1.1.1"),
            Err(NetError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(IpClass::D.to_string(), "D (Multicast)");
        assert_eq!(IpClass::E.to_string(), "E (Experimental)");
        assert_eq!(serde_json::to_string(&IpClass::A).unwrap(), "\"A\"");
        assert_eq!(
            serde_json::to_string(&IpStatus::Loopback).unwrap(),
            "\"Loopback\""
        );
    }
}
