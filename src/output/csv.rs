//! CSV output formatting.

use crate::processing::{BatchOutcome, Request, Response, SubnetListing};
use std::fmt::Write;

/// Quote a value as a CSV field, right-aligned to `width`.
///
/// Embedded double quotes are doubled so spreadsheet tools read the field back intact.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    format!("{:>width$}", format!("\"{escaped}\""))
}

/// Render one response as CSV, header row first.
pub fn render_csv(request: &Request, response: &Response) -> String {
    match response {
        Response::Subnets(listing) => render_listing(listing),
        Response::Details(details) => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                r#""address","ip_class","ip_status","network","subnet_mask","broadcast","hosts""#
            );
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{}",
                format_field(&details.ip.address, 17),
                format_field(details.ip.ip_class, 18),
                format_field(details.ip.ip_status, 10),
                format_field(&details.network.ip, 17),
                format_field(&details.network.subnet_mask, 17),
                format_field(&details.network.broadcast, 17),
                format_field(details.network.hosts, 12),
            );
            out
        }
        other => format!(
            "\"input\",\"output\"\n{},{}\n",
            format_field(request_input(request), 34),
            format_field(response_value(other), 34)
        ),
    }
}

/// Render a batch as CSV, one row per request.
pub fn render_batch_csv(outcomes: &[BatchOutcome]) -> String {
    let mut out = String::from("\"index\",\"op\",\"input\",\"status\",\"output\"\n");
    for outcome in outcomes {
        let (status, output) = match &outcome.result {
            Ok(response) => ("ok", response_value(response)),
            Err(e) => ("error", e.to_string()),
        };
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            format_field(outcome.index, 6),
            format_field(outcome.request.op(), 16),
            format_field(request_input(&outcome.request), 34),
            format_field(status, 7),
            format_field(output, 34),
        );
    }
    out
}

fn render_listing(listing: &SubnetListing) -> String {
    let mut out =
        String::from(r#""cnt","subnet_cidr","start_ip","end_ip","subnet_mask","usable_hosts""#);
    out.push('\n');
    for (i, range) in listing.subnets.iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            format_field(i + 1, 6),
            format_field(format!("{}/{}", range.start_ip, listing.mask_prefix), 20),
            format_field(range.start_ip, 17),
            format_field(range.end_ip, 17),
            format_field(&listing.subnet_mask, 17),
            format_field(listing.usable_hosts, 12),
        );
    }
    out
}

/// The request arguments on one line.
fn request_input(request: &Request) -> String {
    match request {
        Request::Binary { ip_address } => ip_address.clone(),
        Request::Decimal { ip_address_bin } => ip_address_bin.clone(),
        Request::PrefixToMask { prefix } => format!("/{prefix}"),
        Request::MaskToPrefix { mask_ip } => mask_ip.clone(),
        Request::Details {
            ip_address,
            mask_prefix,
        } => format!("{ip_address}/{mask_prefix}"),
        Request::Subnets {
            network_ip_address,
            mask_prefix,
            hosts_per_subnet,
        } => format!("{network_ip_address}/{mask_prefix} hosts={hosts_per_subnet}"),
    }
}

/// The main value of a response on one line.
fn response_value(response: &Response) -> String {
    match response {
        Response::Binary { ip_address_binary } => ip_address_binary.clone(),
        Response::Decimal { ip_address } => ip_address.clone(),
        Response::Mask { ip_mask } => ip_mask.clone(),
        Response::Prefix { prefix } => format!("/{prefix}"),
        Response::Details(details) => {
            format!("{}/{}", details.network.ip, details.network.subnet_mask)
        }
        Response::Subnets(listing) => format!(
            "{} x /{} ({} hosts)",
            listing.subnet_count, listing.mask_prefix, listing.usable_hosts
        ),
    }
}
