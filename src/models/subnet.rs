//! Subnet plan produced by the subnet divider.

use super::cidr::Cidr;
use serde::Serialize;
use std::net::Ipv4Addr;

/// First and last address of one subnet, network and broadcast included.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubnetRange {
    pub start_ip: Ipv4Addr,
    pub end_ip: Ipv4Addr,
}

/// Result of dividing a base network into equally sized subnets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    /// Base network, aligned to its prefix.
    pub base: Cidr,
    /// Host requirement the plan was built for.
    pub hosts_requested: u64,
    /// Mask of every subnet in the plan.
    pub subnet_mask: Ipv4Addr,
    /// Prefix length of every subnet in the plan.
    pub mask_prefix: u8,
    /// Usable hosts in each subnet.
    pub usable_hosts: u64,
    /// Addresses per subnet, network and broadcast included.
    pub block_size: u64,
    /// How many subnets tile the base network.
    pub subnet_count: u64,
}

impl SubnetPlan {
    /// Iterate the subnets in ascending address order.
    pub fn subnets(&self) -> SubnetIter {
        let start = u32::from(self.base.lo()) as u64;
        SubnetIter {
            next: start,
            end: start + self.block_size * self.subnet_count,
            block_size: self.block_size,
        }
    }

    /// The first `limit` subnets, collected.
    pub fn ranges(&self, limit: usize) -> Vec<SubnetRange> {
        self.subnets().take(limit).collect()
    }
}

/// Lazy, exact-size iterator over the subnets of a [`SubnetPlan`].
#[derive(Debug, Clone)]
pub struct SubnetIter {
    next: u64,
    end: u64,
    block_size: u64,
}

impl Iterator for SubnetIter {
    type Item = SubnetRange;

    fn next(&mut self) -> Option<SubnetRange> {
        if self.next >= self.end {
            return None;
        }
        let start = self.next;
        self.next += self.block_size;
        // start and end stay inside the u32 base network
        Some(SubnetRange {
            start_ip: Ipv4Addr::from(start as u32),
            end_ip: Ipv4Addr::from((start + self.block_size - 1) as u32),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ((self.end - self.next) / self.block_size) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubnetIter {}
