//! Integration tests for subnet-calc
//!
//! These tests drive the public entry points from input strings to results.

use std::net::Ipv4Addr;
use subnet_calc::config::Policy;
use subnet_calc::error::{CalcError, Reserved};
use subnet_calc::models::{cidr_to_mask, mask_to_cidr, IpClass, MAX_LENGTH};
use subnet_calc::output::{write_csv, write_json, write_table};
use subnet_calc::parsing::parse_mask;
use subnet_calc::{
    compute_from_address_and_mask, compute_from_address_and_mask_with_policy, compute_from_cidr,
    compute_from_cidr_with_policy,
};

#[test]
fn test_class_c_from_address_and_mask() {
    let info = compute_from_address_and_mask("192.168.1.10", "255.255.255.0")
        .expect("Failed to calculate 192.168.1.10/24");

    assert_eq!(info.prefix, 24);
    assert_eq!(info.class, IpClass::C);
    assert_eq!(info.network.to_string(), "192.168.1.0");
    assert_eq!(info.broadcast.to_string(), "192.168.1.255");
    assert_eq!(info.first_host.to_string(), "192.168.1.1");
    assert_eq!(info.last_host.to_string(), "192.168.1.254");
    assert_eq!(info.num_hosts, 254);
}

#[test]
fn test_class_a_from_cidr() {
    let info = compute_from_cidr("10.0.0.0/8").expect("Failed to calculate 10.0.0.0/8");

    assert_eq!(info.mask.to_string(), "255.0.0.0");
    assert_eq!(info.class, IpClass::A);
    assert_eq!(info.num_hosts, (1u64 << 24) - 2);
}

#[test]
fn test_both_entry_points_agree() {
    for (cidr, addr, mask) in [
        ("172.16.33.4/20", "172.16.33.4", "255.255.240.0"),
        ("192.168.100.77/26", "192.168.100.77", "255.255.255.192"),
        ("10.9.8.7/13", "10.9.8.7", "255.248.0.0"),
    ] {
        assert_eq!(
            compute_from_cidr(cidr).unwrap(),
            compute_from_address_and_mask(addr, mask).unwrap(),
            "{cidr}"
        );
    }
}

#[test]
fn test_rejections() {
    let err = compute_from_address_and_mask("127.0.0.1", "255.0.0.0").unwrap_err();
    assert_eq!(err.reserved_reason(), Some(Reserved::Loopback));

    let err = compute_from_cidr("0.0.0.0/8").unwrap_err();
    assert_eq!(err.reserved_reason(), Some(Reserved::Unspecified));

    let err = compute_from_cidr("192.168.1.255/24").unwrap_err();
    assert_eq!(err.reserved_reason(), Some(Reserved::SelfBroadcast));

    assert!(matches!(
        compute_from_address_and_mask("192.168.1.10", "255.0.255.0"),
        Err(CalcError::InvalidMask(_))
    ));
    assert!(matches!(
        compute_from_cidr("192.168.1.0/31"),
        Err(CalcError::InvalidPrefix(_))
    ));
    assert!(matches!(
        compute_from_cidr("192.168.1.0"),
        Err(CalcError::InvalidCidr(_))
    ));
    assert!(matches!(
        compute_from_address_and_mask("192.168.1", "255.255.255.0"),
        Err(CalcError::InvalidAddress(_))
    ));
}

#[test]
fn test_mask_cidr_round_trip() {
    for p in 0..=MAX_LENGTH {
        assert_eq!(mask_to_cidr(cidr_to_mask(p).unwrap()), p);
    }
    assert!(parse_mask("255.255.128.0").is_ok());
    assert!(parse_mask("255.0.255.0").is_err());
}

#[test]
fn test_host_range_properties() {
    let addr = "10.123.45.66";
    for p in 1..=30u8 {
        let info = compute_from_cidr_with_policy(&format!("{addr}/{p}"), &Policy::default())
            .unwrap_or_else(|e| panic!("/{p}: {e}"));
        assert_eq!(u32::from(info.first_host), u32::from(info.network) + 1);
        assert_eq!(u32::from(info.last_host), u32::from(info.broadcast) - 1);

        let again = compute_from_cidr_with_policy(
            &format!("{}/{p}", info.network),
            &Policy::lenient(),
        )
        .unwrap();
        assert_eq!((again.network, again.broadcast), (info.network, info.broadcast));
    }
}

#[test]
fn test_enumeration_end_to_end() {
    let policy = Policy {
        enumerate: true,
        ..Default::default()
    };
    let info = compute_from_address_and_mask_with_policy("192.168.1.10", "255.255.255.192", &policy)
        .unwrap();
    let subnets = info.subnets.as_ref().expect("subnets requested");
    assert_eq!(subnets.len(), 4);
    let networks: Vec<Ipv4Addr> = subnets.iter().map(|s| s.network).collect();
    assert_eq!(
        networks,
        vec![
            Ipv4Addr::new(192, 168, 1, 0),
            Ipv4Addr::new(192, 168, 1, 64),
            Ipv4Addr::new(192, 168, 1, 128),
            Ipv4Addr::new(192, 168, 1, 192),
        ]
    );

    let info = compute_from_cidr_with_policy("10.0.0.1/20", &policy).unwrap();
    assert_eq!(info.num_subnets, 4096);
    assert!(info.subnets_truncated);
    assert_eq!(info.subnets.unwrap().len(), policy.max_subnets);
}

#[test]
fn test_form_policy() {
    let form = Policy::form();
    assert!(compute_from_cidr_with_policy("10.0.0.1/8", &form).is_ok());
    assert!(matches!(
        compute_from_cidr_with_policy("10.0.0.1/4", &form),
        Err(CalcError::InvalidCidr(_))
    ));
}

#[test]
fn test_all_outputs_render() {
    let policy = Policy {
        enumerate: true,
        ..Default::default()
    };
    let info = compute_from_cidr_with_policy("192.168.7.3/28", &policy).unwrap();

    let mut table = Vec::new();
    write_table(&info, &mut table).unwrap();
    assert!(String::from_utf8(table).unwrap().contains("192.168.7.0/28"));

    let mut csv = Vec::new();
    write_csv(&info, &mut csv).unwrap();
    // header plus 16 subnets
    assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 17);

    let mut json = Vec::new();
    write_json(&info, &mut json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["broadcast"], "192.168.7.15");
}
