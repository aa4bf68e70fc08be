use std::{io, path::PathBuf};

use thiserror::Error;

/// Rule generation errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Source port outside of `1..=65535`.
    #[error("Invalid source port '{0}'")]
    InvalidSourcePort(i64),
    /// Destination port outside of `1..=65535`.
    #[error("Invalid destination port '{0}'")]
    InvalidDestPort(i64),
    /// Protocol list contains something other than `tcp` or `udp`.
    /// Holds the whole list as given.
    #[error("Invalid protocol '{0}'")]
    InvalidProtocol(String),
    /// Source is not a valid IPv4 network.
    #[error("'{0}' does not appear to be an IPv4 network")]
    InvalidNetwork(String),
    /// Source network with bits set right of the prefix.
    #[error("'{0}' has host bits set")]
    HostBitsSet(String),
    /// Netmask that isn't a contiguous run of ones.
    #[error("'{0}' is not a valid netmask")]
    InvalidNetmask(String),
    /// Destination is not a single IPv4 address.
    #[error("'{0}' does not appear to be an IPv4 address")]
    InvalidAddress(String),
    /// Comment template has a `{` or `}` without a partner.
    #[error("Single '{0}' encountered in comment template")]
    UnmatchedBrace(char),
    /// Comment template references a field that doesn't exist.
    #[error("Unknown field '{0}' in comment template")]
    UnknownField(String),
    /// Source list couldn't be read.
    #[error("Failed to read {}", path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
