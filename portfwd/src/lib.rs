//! Generates iptables DNAT (port forwarding) commands.
//!
//! Nothing here touches the firewall: every operation maps validated addresses,
//! ports and protocols to command strings.
//!
//! # Example
//! ```
//! # use portfwd::{format_commands, Port, Protocol};
//! let commands = format_commands(
//!     &["203.0.113.0/24"],
//!     Port::source(2222).unwrap(),
//!     &[Protocol::TCP],
//!     "192.168.1.10",
//!     Some(Port::dest(22).unwrap()),
//!     Some("ssh from {src_address}"),
//!     true,
//! )
//! .unwrap();
//! assert_eq!(
//!     commands,
//!     ["iptables -t nat -A prerouting_wan_rule -s 203.0.113.0/24 -p tcp -m tcp --dport 2222 \
//!       -m comment --comment 'ssh from 203.0.113.0/24' -j DNAT --to-destination 192.168.1.10:22"]
//! );
//! ```
mod cidr;
mod comment;
mod config;
mod error;
mod formatter;
mod rule;
pub mod source;

pub use cidr::{DestAddr, SourceNet};
pub use comment::CommentTemplate;
pub use config::RuleConfig;
pub use error::Error;
pub use formatter::{build_rules, format_command_raw, format_commands, Formatter};
pub use rule::{Port, Protocol, Rule};
pub use source::Source;
pub type Result<T> = std::result::Result<T, Error>;

const DEFAULT_IPTABLES: &str = "iptables";
const DEFAULT_TABLE: &str = "nat";
const DEFAULT_CHAIN: &str = "prerouting_wan_rule";
