//! Typed requests and responses for every operation, and one dispatcher.

use super::details::{network_details, NetworkDetails};
use super::divider::divide;
use crate::error::NetError;
use crate::models::{
    decode_binary, encode_binary, mask_to_prefix, prefix_to_mask, SubnetPlan, SubnetRange,
};
use serde::{Deserialize, Serialize};

/// One operation with its arguments, tagged by `op` in JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Dotted quad to 32 binary digits.
    Binary { ip_address: String },
    /// 32 binary digits to dotted quad.
    Decimal { ip_address_bin: String },
    PrefixToMask { prefix: u8 },
    MaskToPrefix { mask_ip: String },
    /// Network details report.
    Details { ip_address: String, mask_prefix: u8 },
    /// Divide a network into subnets.
    Subnets {
        network_ip_address: String,
        mask_prefix: u8,
        hosts_per_subnet: u64,
    },
}

impl Request {
    /// Short operation name, as used in the `op` tag.
    pub fn op(&self) -> &'static str {
        match self {
            Request::Binary { .. } => "binary",
            Request::Decimal { .. } => "decimal",
            Request::PrefixToMask { .. } => "prefix_to_mask",
            Request::MaskToPrefix { .. } => "mask_to_prefix",
            Request::Details { .. } => "details",
            Request::Subnets { .. } => "subnets",
        }
    }
}

/// A subnet plan with its subnets listed, possibly cut short.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetListing {
    pub subnet_mask: String,
    pub mask_prefix: u8,
    pub usable_hosts: u64,
    pub subnet_count: u64,
    pub subnets: Vec<SubnetRange>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl SubnetListing {
    /// List at most `limit` subnets of `plan`.
    pub fn new(plan: &SubnetPlan, limit: usize) -> SubnetListing {
        let subnets = plan.ranges(limit);
        let truncated = (subnets.len() as u64) < plan.subnet_count;
        if truncated {
            log::warn!(
                "listing {} of {} subnets for {}",
                subnets.len(),
                plan.subnet_count,
                plan.base
            );
        }
        SubnetListing {
            subnet_mask: plan.subnet_mask.to_string(),
            mask_prefix: plan.mask_prefix,
            usable_hosts: plan.usable_hosts,
            subnet_count: plan.subnet_count,
            subnets,
            truncated,
        }
    }
}

/// Result of one [`Request`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Response {
    Binary { ip_address_binary: String },
    Decimal { ip_address: String },
    Mask { ip_mask: String },
    Prefix { prefix: u8 },
    Details(NetworkDetails),
    Subnets(SubnetListing),
}

/// Run one request. `subnet_limit` caps how many subnets a plan lists.
pub fn execute(request: &Request, subnet_limit: usize) -> Result<Response, NetError> {
    log::debug!("execute {request:?}");
    let response = match request {
        Request::Binary { ip_address } => Response::Binary {
            ip_address_binary: encode_binary(ip_address)?,
        },
        Request::Decimal { ip_address_bin } => Response::Decimal {
            ip_address: decode_binary(ip_address_bin)?,
        },
        Request::PrefixToMask { prefix } => Response::Mask {
            ip_mask: prefix_to_mask(*prefix)?,
        },
        Request::MaskToPrefix { mask_ip } => Response::Prefix {
            prefix: mask_to_prefix(mask_ip)?,
        },
        Request::Details {
            ip_address,
            mask_prefix,
        } => Response::Details(network_details(ip_address, *mask_prefix)?),
        Request::Subnets {
            network_ip_address,
            mask_prefix,
            hosts_per_subnet,
        } => {
            let plan = divide(network_ip_address, *mask_prefix, *hosts_per_subnet)?;
            Response::Subnets(SubnetListing::new(&plan, subnet_limit))
        }
    };
    Ok(response)
}
