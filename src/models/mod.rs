//! Addressing value types and the pure conversions between them.
//!
//! - [`codec`] - dotted quad / binary / prefix / mask conversions
//! - [`Cidr`] - IPv4 network in CIDR notation
//! - [`NetworkCalculator`] - network, broadcast, hosts, class and status
//! - [`SubnetPlan`] - result of dividing a network into subnets

mod cidr;
pub mod codec;
mod network;
mod subnet;

// Re-export public types
pub use cidr::{get_cidr_mask, validate_prefix, Cidr, MAX_LENGTH, MIN_LENGTH};
pub use codec::{
    decode_binary, encode_binary, mask_addr_to_prefix, mask_to_prefix, parse_address,
    parse_binary, prefix_to_mask, prefix_to_mask_addr,
};
pub use network::{
    broadcast_address, ip_class, ip_status, network_address, usable_host_count, usable_hosts,
    IpClass, IpStatus, NetworkCalculator,
};
pub use subnet::{SubnetIter, SubnetPlan, SubnetRange};
