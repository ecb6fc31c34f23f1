//! Subnet divider.
//!
//! Splits a base network into the fewest equally sized subnets that each hold
//! at least the requested number of hosts.

use crate::error::NetError;
use crate::models::{
    parse_address, prefix_to_mask_addr, Cidr, SubnetPlan, MAX_LENGTH, MIN_LENGTH,
};

/// Divide `base_network/base_prefix` into subnets of at least `hosts_per_subnet` usable hosts.
///
/// The block size is the smallest power of two `b` with `b - 2 >= hosts_per_subnet`.
/// A base address with host bits set is cut down to its network address first.
///
/// # Errors
/// * [`NetError::InvalidAddressFormat`] / [`NetError::InvalidPrefixLength`] for bad input
/// * [`NetError::SubnetCapacityExceeded`] when the base network is too small
/// * [`NetError::SubnetSizeInfeasible`] when no prefix inside the base network fits
pub fn divide(
    base_network: &str,
    base_prefix: u8,
    hosts_per_subnet: u64,
) -> Result<SubnetPlan, NetError> {
    log::debug!("divide({base_network}/{base_prefix}, hosts_per_subnet={hosts_per_subnet})");

    let requested = Cidr::from_parts(parse_address(base_network)?, base_prefix)?;
    if !requested.is_aligned() {
        log::warn!(
            "base network {requested} is not a network address, using {}",
            requested.network()
        );
    }
    divide_cidr(requested.network(), hosts_per_subnet)
}

/// Same as [`divide`] for an already parsed network.
pub fn divide_cidr(base: Cidr, hosts_per_subnet: u64) -> Result<SubnetPlan, NetError> {
    let base = base.network();
    let infeasible = || NetError::SubnetSizeInfeasible {
        hosts: hosts_per_subnet,
        base_prefix: base.prefix(),
    };

    let available = base.size();
    if hosts_per_subnet > available {
        return Err(NetError::SubnetCapacityExceeded {
            hosts: hosts_per_subnet,
            available,
        });
    }
    // hosts_per_subnet <= 2^31 here, no overflow
    let block_size = (hosts_per_subnet + 2).next_power_of_two();
    let host_bits = block_size.trailing_zeros();
    let mask_prefix = (MAX_LENGTH as u32)
        .checked_sub(host_bits)
        .filter(|p| (MIN_LENGTH as u32..=MAX_LENGTH as u32).contains(p))
        .ok_or_else(infeasible)? as u8;
    if mask_prefix < base.prefix() {
        return Err(infeasible());
    }

    let subnet_count = 1u64 << (mask_prefix - base.prefix());
    let plan = SubnetPlan {
        base,
        hosts_requested: hosts_per_subnet,
        subnet_mask: prefix_to_mask_addr(mask_prefix)?,
        mask_prefix,
        usable_hosts: block_size - 2,
        block_size,
        subnet_count,
    };

    log::debug!(
        "divide {base} into {subnet_count} x /{mask_prefix} ({} usable hosts each)",
        plan.usable_hosts
    );
    Ok(plan)
}
