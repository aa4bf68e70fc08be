mod test;

use std::{fmt, net::Ipv4Addr, str::FromStr};

use ipnet::Ipv4Net;

use crate::{Error, Result};

/// IPv4 network matched as the source of a rule.
///
/// Always normalized: host bits are zero and the text form is `a.b.c.d/len`,
/// even for single hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceNet(Ipv4Net);

impl SourceNet {
    pub fn new(net: Ipv4Net) -> Result<Self> {
        if net.addr() != net.network() {
            return Err(Error::HostBitsSet(net.to_string()));
        }
        Ok(Self(net))
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }
}

impl FromStr for SourceNet {
    type Err = Error;

    /// Accepts `a.b.c.d`, `a.b.c.d/len`, `a.b.c.d/netmask` and `a.b.c.d/hostmask`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidNetwork(s.to_string());
        let (addr, prefix) = match s.split_once('/') {
            None => (s, None),
            Some((addr, prefix)) => (addr, Some(prefix)),
        };
        let addr = Ipv4Addr::from_str(addr).map_err(|_| invalid())?;
        let prefix = match prefix {
            None => 32,
            Some(prefix) => parse_prefix(prefix).ok_or_else(invalid)?,
        };
        let net = Ipv4Net::new(addr, prefix).map_err(|_| invalid())?;
        if net.addr() != net.network() {
            return Err(Error::HostBitsSet(s.to_string()));
        }
        Ok(Self(net))
    }
}

impl fmt::Display for SourceNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Prefix length first, then a netmask, then a hostmask.
fn parse_prefix(prefix: &str) -> Option<u8> {
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        return prefix.parse::<u8>().ok().filter(|&len| len <= 32);
    }
    let mask = Ipv4Addr::from_str(prefix).ok()?;
    ipnet::ipv4_mask_to_prefix(mask)
        .or_else(|_| ipnet::ipv4_mask_to_prefix(!mask))
        .ok()
}

/// Single IPv4 address traffic is forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestAddr(Ipv4Addr);

impl DestAddr {
    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }
}

impl FromStr for DestAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Addr::from_str(s)
            .map(Self)
            .map_err(|_| Error::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for DestAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SourceNet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DestAddr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
