
use std::{fmt, str::FromStr};

use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::{
    cidr::{DestAddr, SourceNet},
    Error, Result,
};

/// Valid TCP/UDP port, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Port(u16);

impl Port {
    /// Validates a source port, `value` must be in `1..=65535`.
    pub fn source(value: i64) -> Result<Self> {
        Self::checked(value).ok_or(Error::InvalidSourcePort(value))
    }

    /// Validates a destination port, `value` must be in `1..=65535`.
    pub fn dest(value: i64) -> Result<Self> {
        Self::checked(value).ok_or(Error::InvalidDestPort(value))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    fn checked(value: i64) -> Option<Self> {
        u16::try_from(value).ok().filter(|&p| p != 0).map(Self)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Transport protocol matched by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Protocol {
    TCP,
    UDP,
}

impl Protocol {
    /// Parses a comma separated protocol list such as `tcp,udp`.
    ///
    /// Order and duplicates are kept. Names are case-sensitive.
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',')
            .map(Protocol::from_str)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidProtocol(list.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One fully resolved NAT rule, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rule {
    pub(crate) src_address: SourceNet,
    pub(crate) src_port: Port,
    pub(crate) protocol: Protocol,
    pub(crate) dest_address: DestAddr,
    pub(crate) dest_port: Port,
    pub(crate) comment: Option<String>,
}

impl Rule {
    /// Creates a new `Rule`, forwarding to the same port on `dest_address`.
    pub fn new(
        src_address: SourceNet,
        src_port: Port,
        protocol: Protocol,
        dest_address: DestAddr,
    ) -> Self {
        Self {
            src_address,
            src_port,
            protocol,
            dest_address,
            dest_port: src_port,
            comment: None,
        }
    }

    /// Sets the destination port for the `Rule`.
    pub fn with_dest_port(self, dest_port: Port) -> Self {
        Self { dest_port, ..self }
    }

    /// Attaches an already expanded comment to the `Rule`.
    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..self
        }
    }

    pub fn src_address(&self) -> &SourceNet {
        &self.src_address
    }

    pub fn src_port(&self) -> Port {
        self.src_port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn dest_address(&self) -> &DestAddr {
        &self.dest_address
    }

    pub fn dest_port(&self) -> Port {
        self.dest_port
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
