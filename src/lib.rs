//! IPv4 addressing and subnetting toolkit.
//!
//! The computation core lives in [`models`] (codec, CIDR arithmetic, network
//! calculator) and [`processing`] (subnet divider, details report, request
//! dispatch). Everything there is a pure function of its inputs.
//! [`output`], [`config`] and [`cli`] make up the command line shell.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::NetError;
pub use models::{
    broadcast_address, decode_binary, encode_binary, ip_class, ip_status, mask_to_prefix,
    network_address, prefix_to_mask, usable_host_count, Cidr, IpClass, IpStatus,
    NetworkCalculator, SubnetPlan, SubnetRange,
};
pub use processing::{divide, execute, network_details, Request, Response};
