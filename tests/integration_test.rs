//! Integration tests for netify
//!
//! These tests drive the public API the way the command line does.

use netify::cli::{run, Cli, Invocation};
use netify::config::{Config, OutputFormat};
use netify::processing::{read_requests, run_batch, Response};
use netify::{
    decode_binary, divide, encode_binary, ip_class, mask_to_prefix, prefix_to_mask, IpClass,
    NetError, NetworkCalculator,
};
use std::io::Write;
use std::net::Ipv4Addr;

#[test]
fn test_documented_examples() {
    assert_eq!(
        encode_binary("192.168.1.1").unwrap(),
        "11000000101010000000000100000001"
    );
    assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
    assert_eq!(mask_to_prefix("255.255.255.0").unwrap(), 24);
    assert!(matches!(
        mask_to_prefix("255.0.255.0"),
        Err(NetError::InvalidMask(_))
    ));
    assert_eq!(ip_class("10.0.0.1").unwrap(), IpClass::A);
    assert_eq!(ip_class("200.1.1.1").unwrap(), IpClass::C);

    assert!(matches!(
        encode_binary("999.1.1.1"),
        Err(NetError::InvalidAddressFormat(_))
    ));
    assert!(matches!(
        encode_binary("1.2.3"),
        Err(NetError::InvalidAddressFormat(_))
    ));
    assert_eq!(prefix_to_mask(0), Err(NetError::InvalidPrefixLength(0)));
    assert_eq!(prefix_to_mask(33), Err(NetError::InvalidPrefixLength(33)));
}

#[test]
fn test_round_trip_sampled_address_space() {
    // every 65521st address (prime stride) plus both ends
    let samples = (0..=u32::MAX)
        .step_by(65_521)
        .chain([u32::MAX]);
    for value in samples {
        let addr = Ipv4Addr::from(value).to_string();
        let bits = encode_binary(&addr).unwrap();
        assert_eq!(decode_binary(&bits).unwrap(), addr);
    }
}

#[test]
fn test_calculator_and_divider_agree() {
    let plan = divide("172.16.0.0", 16, 500).unwrap();
    assert_eq!(plan.mask_prefix, 23);
    assert_eq!(plan.subnet_count, 128);

    for range in plan.subnets() {
        let calc = NetworkCalculator::new(
            &range.end_ip.to_string(),
            &plan.subnet_mask.to_string(),
        )
        .unwrap();
        assert_eq!(calc.network_address(), range.start_ip.to_string());
        assert_eq!(calc.broadcast_address(), range.end_ip.to_string());
        assert_eq!(calc.usable_host_count(), plan.usable_hosts);
    }
}

#[test]
fn test_divide_capacity_exceeded() {
    assert_eq!(
        divide("10.0.0.0", 30, 5),
        Err(NetError::SubnetCapacityExceeded {
            hosts: 5,
            available: 4
        })
    );
}

#[test]
fn test_batch_file() {
    let requests = read_requests("src/tests/test_data/requests_01.json")
        .expect("Failed to read request file");
    let outcomes = run_batch(&requests, 1024);
    assert_eq!(outcomes.len(), 8);

    let failed: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.index)
        .collect();
    assert_eq!(failed, vec![4, 7], "bad mask and over-capacity request");

    match &outcomes[6].result {
        Ok(Response::Subnets(listing)) => {
            assert_eq!(listing.subnets.len(), 8);
            assert_eq!(listing.subnets[0].end_ip, Ipv4Addr::new(192, 168, 1, 31));
            assert_eq!(listing.subnets[7].start_ip, Ipv4Addr::new(192, 168, 1, 224));
        }
        other => panic!("expected subnets, got {other:?}"),
    }
}

#[test]
fn test_batch_file_with_missing_field() {
    let err = read_requests("src/tests/test_data/requests_bad_02.json").unwrap_err();
    assert!(err.to_string().contains("[1]"), "unexpected error: {err}");
}

#[test]
fn test_cli_batch_reports_failures() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"op": "prefix_to_mask", "prefix": 30}}, {{"op": "binary", "ip_address": "1.2.3"}}]"#
    )
    .unwrap();

    let cli = Cli {
        invocation: Invocation::Batch(file.path().to_path_buf()),
        format: Some(OutputFormat::Json),
        limit: None,
    };
    let mut out = Vec::new();
    let err = run(&cli, &Config::default(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "1 of 2 requests failed");

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["response"]["ip_mask"], "255.255.255.252");
    assert_eq!(value[1]["error"], "invalid IP address format: '1.2.3'");
}
