
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, ArgGroup, Parser};
use portfwd::{build_rules, Formatter, Port, Protocol, Rule, RuleConfig, Source};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(version, about = "Print iptables port forwarding (DNAT) rules")]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["src_address", "src_file"])
))]
pub struct Cli {
    /// Comma separated source addresses or networks
    #[arg(short = 'a', long, value_name = "ADDRESSES")]
    src_address: Option<String>,
    /// File with one source address per line, `-` for stdin
    #[arg(short = 'f', long, value_name = "PATH")]
    src_file: Option<PathBuf>,
    /// Port matched on incoming traffic
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    src_port: i64,
    /// Comma separated protocols: tcp, udp
    #[arg(short = 't', long)]
    protocol: String,
    /// Address traffic is forwarded to
    #[arg(short = 'A', long)]
    dest_address: String,
    /// Port traffic is forwarded to [default: source port]
    #[arg(short = 'P', long, allow_negative_numbers = true)]
    dest_port: Option<i64>,
    /// Comment attached to every rule
    #[arg(short = 'c', long)]
    comment: Option<String>,
    /// Expand {src_address}, {src_port}, {protocol}, {dest_address} and {dest_port} in the comment
    #[arg(short = 'k', long)]
    format_comment: bool,
    /// iptables table [default: nat]
    #[arg(long, env = "PORTFWD_TABLE")]
    table: Option<String>,
    /// iptables chain [default: prerouting_wan_rule]
    #[arg(long, env = "PORTFWD_CHAIN")]
    chain: Option<String>,
    /// iptables binary [default: iptables]
    #[arg(long, env = "PORTFWD_IPTABLES")]
    iptables: Option<String>,
    /// Print one JSON object per rule
    #[arg(long)]
    json: bool,
    /// More logging on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Serialize)]
struct JsonRule<'a> {
    #[serde(flatten)]
    rule: &'a Rule,
    command: String,
}

impl Cli {
    fn source(&self) -> Result<Source> {
        match (&self.src_address, &self.src_file) {
            (Some(list), _) => Ok(Source::Inline(list.clone())),
            (None, Some(path)) => Ok(Source::File(path.clone())),
            (None, None) => bail!("One of --src-address or --src-file is required"),
        }
    }

    fn rule_config(&self) -> RuleConfig {
        let mut config = RuleConfig::new();
        if let Some(iptables) = &self.iptables {
            config = config.with_iptables(iptables);
        }
        if let Some(table) = &self.table {
            config = config.with_table(table);
        }
        if let Some(chain) = &self.chain {
            config = config.with_chain(chain);
        }
        config
    }

    /// Validates the arguments and produces the output lines.
    ///
    /// Ports and protocols are checked before the sources are read, the comment template last.
    pub fn lines(&self) -> Result<Vec<String>> {
        let src_port = Port::source(self.src_port)?;
        let dest_port = self.dest_port.map(Port::dest).transpose()?;
        let protocols = Protocol::parse_list(&self.protocol)?;

        let addresses = self.source()?.addresses()?;
        tracing::debug!(count = addresses.len(), "Resolved source addresses");

        let rules = build_rules(
            &addresses,
            src_port,
            &protocols,
            &self.dest_address,
            dest_port,
            self.comment.as_deref(),
            self.format_comment,
        )?;

        let formatter = Formatter::new(self.rule_config());
        if !self.json {
            return Ok(formatter.render_all(&rules));
        }
        rules
            .iter()
            .map(|rule| -> Result<String> {
                let line = JsonRule {
                    rule,
                    command: formatter.render(rule),
                };
                Ok(serde_json::to_string(&line)?)
            })
            .collect()
    }
}
