#![cfg(test)]

use std::net::Ipv4Addr;

use test_case::test_case;

use super::{DestAddr, SourceNet};
use crate::Error;

#[test_case("10.0.0.1", "10.0.0.1/32" ; "bare host")]
#[test_case("10.0.0.0/24", "10.0.0.0/24" ; "prefix")]
#[test_case("10.0.0.0/024", "10.0.0.0/24" ; "prefix leading zero")]
#[test_case("10.0.0.0/255.255.255.0", "10.0.0.0/24" ; "netmask")]
#[test_case("10.0.0.0/0.0.0.255", "10.0.0.0/24" ; "hostmask")]
#[test_case("10.0.0.0/255.255.0.0", "10.0.0.0/16" ; "netmask 16")]
#[test_case("0.0.0.0/0", "0.0.0.0/0" ; "everything")]
#[test_case("192.168.1.7/32", "192.168.1.7/32" ; "host prefix")]
fn source_net_normalizes(raw: &str, expected: &str) {
    let net: SourceNet = raw.parse().unwrap();
    assert_eq!(net.to_string(), expected);
}

#[test_case("" ; "empty")]
#[test_case("10.0.0" ; "three octets")]
#[test_case("10.0.0.256" ; "octet overflow")]
#[test_case("010.0.0.1" ; "leading zero octet")]
#[test_case("10.0.0.0/33" ; "prefix too long")]
#[test_case("10.0.0.0/" ; "empty prefix")]
#[test_case("10.0.0.0/+24" ; "signed prefix")]
#[test_case("10.0.0.0/255.0.255.0" ; "non contiguous mask")]
#[test_case("fafa::1" ; "ipv6")]
#[test_case(" 10.0.0.1" ; "leading space")]
fn source_net_rejects_garbage(raw: &str) {
    assert!(matches!(
        raw.parse::<SourceNet>(),
        Err(Error::InvalidNetwork(s)) if s == raw
    ));
}

#[test_case("10.0.0.1/24" ; "prefix with host bits")]
#[test_case("10.0.0.129/255.255.255.128" ; "netmask with host bits")]
#[test_case("172.16.5.0/16" ; "third octet set")]
fn source_net_rejects_host_bits(raw: &str) {
    assert!(matches!(
        raw.parse::<SourceNet>(),
        Err(Error::HostBitsSet(s)) if s == raw
    ));
}

#[test]
fn source_net_accepts_netmask_without_host_bits() {
    let net: SourceNet = "10.0.0.128/255.255.255.128".parse().unwrap();
    assert_eq!(net.to_string(), "10.0.0.128/25");
}

#[test]
fn source_net_from_ipnet() {
    let net = SourceNet::new("10.1.0.0/16".parse().unwrap()).unwrap();
    assert_eq!(net.prefix_len(), 16);
    assert!(SourceNet::new("10.1.1.0/16".parse().unwrap()).is_err());
}

#[test]
fn dest_addr_parses() {
    let addr: DestAddr = "192.168.0.10".parse().unwrap();
    assert_eq!(addr.addr(), Ipv4Addr::new(192, 168, 0, 10));
    assert_eq!(addr.to_string(), "192.168.0.10");
}

#[test_case("192.168.0.10/32" ; "with prefix")]
#[test_case("192.168.0" ; "short")]
#[test_case("host.example" ; "hostname")]
#[test_case("::1" ; "ipv6 loopback")]
fn dest_addr_rejects(raw: &str) {
    assert!(matches!(
        raw.parse::<DestAddr>(),
        Err(Error::InvalidAddress(s)) if s == raw
    ));
}
