use crate::{DEFAULT_CHAIN, DEFAULT_IPTABLES, DEFAULT_TABLE};

/// Fixed parts of every generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub(crate) iptables: String,
    pub(crate) table: String,
    pub(crate) chain: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            iptables: DEFAULT_IPTABLES.to_string(),
            table: DEFAULT_TABLE.to_string(),
            chain: DEFAULT_CHAIN.to_string(),
        }
    }
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the binary the commands invoke, e.g. `/usr/sbin/iptables-legacy`.
    pub fn with_iptables(self, iptables: impl AsRef<str>) -> Self {
        Self {
            iptables: iptables.as_ref().to_string(),
            ..self
        }
    }

    pub fn with_table(self, table: impl AsRef<str>) -> Self {
        Self {
            table: table.as_ref().to_string(),
            ..self
        }
    }

    pub fn with_chain(self, chain: impl AsRef<str>) -> Self {
        Self {
            chain: chain.as_ref().to_string(),
            ..self
        }
    }

    pub fn iptables(&self) -> &str {
        &self.iptables
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }
}
