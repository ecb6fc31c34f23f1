//! Network details report for an address and prefix length.

use crate::error::NetError;
use crate::models::{IpClass, IpStatus, NetworkCalculator};
use serde::Serialize;

/// What is known about the address itself.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IpInfo {
    pub address: String,
    pub ip_class: IpClass,
    pub ip_status: IpStatus,
}

/// The network the address belongs to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub ip: String,
    pub hosts: u64,
    pub broadcast: String,
    pub subnet_mask: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkDetails {
    pub ip: IpInfo,
    pub network: NetworkInfo,
}

/// Build the details report for `ip_address/mask_prefix`.
pub fn network_details(ip_address: &str, mask_prefix: u8) -> Result<NetworkDetails, NetError> {
    log::debug!("network_details({ip_address}/{mask_prefix})");
    let calc = NetworkCalculator::with_prefix(ip_address, mask_prefix)?;

    Ok(NetworkDetails {
        ip: IpInfo {
            address: calc.address().to_string(),
            ip_class: calc.ip_class()?,
            ip_status: calc.ip_status(),
        },
        network: NetworkInfo {
            ip: calc.network_address(),
            hosts: calc.usable_host_count(),
            broadcast: calc.broadcast_address(),
            subnet_mask: calc.subnet_mask(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_details() {
        let details = network_details("192.168.1.1", 24).unwrap();
        assert_eq!(details.ip.address, "192.168.1.1");
        assert_eq!(details.ip.ip_class, IpClass::C);
        assert_eq!(details.ip.ip_status, IpStatus::Private);
        assert_eq!(details.network.ip, "192.168.1.0");
        assert_eq!(details.network.hosts, 254);
        assert_eq!(details.network.broadcast, "192.168.1.255");
        assert_eq!(details.network.subnet_mask, "255.255.255.0");
    }

    #[test]
    fn test_network_details_json_shape() {
        let details = network_details("8.8.8.8", 8).unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["ip"]["ip_class"], "A");
        assert_eq!(json["ip"]["ip_status"], "Public");
        assert_eq!(json["network"]["ip"], "8.0.0.0");
        assert_eq!(json["network"]["hosts"], 16777214);
        assert_eq!(json["network"]["broadcast"], "8.255.255.255");
    }

    #[test]
    fn test_network_details_errors() {
        assert_eq!(
            network_details("0.0.0.1", 8),
            Err(NetError::InvalidAddress("0.0.0.1".to_string()))
        );
        assert_eq!(
            network_details("10.0.0.1", 33),
            Err(NetError::InvalidPrefixLength(33))
        );
    }
}
