//! Human readable output with colors.

use crate::processing::{NetworkDetails, Request, Response, SubnetListing};
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Write;

/// Split 32 binary digits into dot separated octets for display.
///
/// `11000000101010000000000100000001` becomes
/// `11000000.10101000.00000001.00000001`.
pub fn group_octets(bits: &str) -> String {
    bits.chars()
        .chunks(8)
        .into_iter()
        .map(|octet| octet.collect::<String>())
        .join(".")
}

/// Render one response as text lines.
///
/// Fails when `response` is not the kind `request` produces.
pub fn render_text(request: &Request, response: &Response) -> Result<String, String> {
    let text = match (request, response) {
        (Request::Binary { ip_address }, Response::Binary { ip_address_binary }) => format!(
            "{} -> {}\n",
            ip_address.bold(),
            group_octets(ip_address_binary).green()
        ),
        (Request::Decimal { ip_address_bin }, Response::Decimal { ip_address }) => format!(
            "{} -> {}\n",
            group_octets(ip_address_bin),
            ip_address.green().bold()
        ),
        (Request::PrefixToMask { prefix }, Response::Mask { ip_mask }) => format!(
            "{} -> {}\n",
            format!("/{prefix}").bold(),
            ip_mask.green()
        ),
        (Request::MaskToPrefix { mask_ip }, Response::Prefix { prefix }) => format!(
            "{} -> {}\n",
            mask_ip.bold(),
            format!("/{prefix}").green()
        ),
        (Request::Details { mask_prefix, .. }, Response::Details(details)) => {
            render_details(details, *mask_prefix)
        }
        (Request::Subnets { .. }, Response::Subnets(listing)) => render_listing(listing),
        _ => return Err(format!("response does not answer a {} request", request.op())),
    };
    Ok(text)
}

fn render_details(details: &NetworkDetails, prefix: u8) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {}  class {}  {}",
        "IP",
        details.ip.address.bold(),
        details.ip.ip_class.to_string().cyan(),
        details.ip.ip_status.to_string().yellow()
    );
    let _ = writeln!(out, "{:<10} {}/{}", "Network", details.network.ip, prefix);
    let _ = writeln!(out, "{:<10} {}", "Mask", details.network.subnet_mask);
    let _ = writeln!(out, "{:<10} {}", "Broadcast", details.network.broadcast);
    let _ = writeln!(out, "{:<10} {}", "Hosts", details.network.hosts);
    out
}

fn render_listing(listing: &SubnetListing) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {} x /{} ({}), {} usable hosts each",
        "Subnets",
        listing.subnet_count.to_string().bold(),
        listing.mask_prefix,
        listing.subnet_mask,
        listing.usable_hosts.to_string().green()
    );
    for (i, range) in listing.subnets.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>6}  {:<18} {} - {}",
            i + 1,
            format!("{}/{}", range.start_ip, listing.mask_prefix),
            range.start_ip,
            range.end_ip
        );
    }
    if listing.truncated {
        let _ = writeln!(
            out,
            "#{}# listed {} of {} subnets",
            "NOTE".on_red(),
            listing.subnets.len(),
            listing.subnet_count
        );
    }
    out
}
