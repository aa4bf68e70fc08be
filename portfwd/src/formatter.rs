
use std::fmt::Write;

use crate::{
    cidr::{DestAddr, SourceNet},
    comment::CommentTemplate,
    config::RuleConfig,
    Port, Protocol, Result, Rule,
};

/// Comment attached to every generated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Comment {
    /// Used as given.
    Verbatim(String),
    /// Expanded for each rule, see [CommentTemplate].
    Template(CommentTemplate),
}

impl Comment {
    /// Creates a comment, parsing `text` as a template if `format` is set.
    fn new(text: &str, format: bool) -> Result<Self> {
        if !format {
            return Ok(Comment::Verbatim(text.to_string()));
        }
        let template = CommentTemplate::parse(text)?;
        if !template.has_fields() {
            tracing::debug!(%text, "Comment template has no fields");
        }
        Ok(Comment::Template(template))
    }

    fn for_rule(&self, rule: &Rule) -> String {
        match self {
            Comment::Verbatim(text) => text.clone(),
            Comment::Template(template) => template.render(rule),
        }
    }
}

/// Renders [Rule]s as `iptables` DNAT commands.
///
/// Commands are only produced, never run.
///
/// # Example
/// ```
/// # use portfwd::{Formatter, Port, Protocol, Rule};
/// let rule = Rule::new(
///     "10.0.0.0/24".parse().unwrap(),
///     Port::source(443).unwrap(),
///     Protocol::TCP,
///     "192.168.1.10".parse().unwrap(),
/// );
/// assert_eq!(
///     Formatter::default().render(&rule),
///     "iptables -t nat -A prerouting_wan_rule -s 10.0.0.0/24 -p tcp -m tcp --dport 443 \
///      -j DNAT --to-destination 192.168.1.10:443",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: RuleConfig,
}

impl Formatter {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Renders a single [Rule].
    ///
    /// Single quotes in the comment are written as `'\''` so the comment stays one shell word.
    pub fn render(&self, rule: &Rule) -> String {
        let RuleConfig {
            iptables,
            table,
            chain,
        } = &self.config;
        let proto = rule.protocol();
        let mut command = format!(
            "{iptables} -t {table} -A {chain} -s {src} -p {proto} -m {proto} --dport {src_port}",
            src = rule.src_address(),
            src_port = rule.src_port(),
        );
        if let Some(comment) = rule.comment() {
            let _ = write!(
                command,
                " -m comment --comment '{}'",
                comment.replace('\'', r"'\''")
            );
        }
        let _ = write!(
            command,
            " -j DNAT --to-destination {}:{}",
            rule.dest_address(),
            rule.dest_port()
        );
        command
    }

    /// Renders every [Rule], keeping their order.
    pub fn render_all<'a>(&self, rules: impl IntoIterator<Item = &'a Rule>) -> Vec<String> {
        rules.into_iter().map(|rule| self.render(rule)).collect()
    }
}

/// Builds one [Rule] per source address and protocol, address-major.
///
/// The destination and every source address are validated before the comment, the first
/// invalid one aborts the whole batch. The comment template is only parsed once there is a
/// rule to attach it to. `dest_port` defaults to `src_port`.
pub fn build_rules<S: AsRef<str>>(
    src_addresses: &[S],
    src_port: Port,
    protocols: &[Protocol],
    dest_address: &str,
    dest_port: Option<Port>,
    comment: Option<&str>,
    format_comment: bool,
) -> Result<Vec<Rule>> {
    let dest_address: DestAddr = dest_address.parse()?;
    let dest_port = dest_port.unwrap_or(src_port);
    let src_addresses = src_addresses
        .iter()
        .map(|raw| raw.as_ref().parse::<SourceNet>())
        .collect::<Result<Vec<_>>>()?;
    if src_addresses.is_empty() || protocols.is_empty() {
        return Ok(Vec::new());
    }
    let comment = comment
        .map(|text| Comment::new(text, format_comment))
        .transpose()?;

    let mut rules = Vec::with_capacity(src_addresses.len() * protocols.len());
    for src_address in src_addresses {
        for &protocol in protocols {
            let mut rule = Rule::new(src_address, src_port, protocol, dest_address)
                .with_dest_port(dest_port);
            if let Some(comment) = &comment {
                let text = comment.for_rule(&rule);
                rule = rule.with_comment(text);
            }
            tracing::debug!(
                src = %rule.src_address(),
                %protocol,
                dest = %rule.dest_address(),
                "Generated rule"
            );
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Formats one command with the default [RuleConfig].
pub fn format_command_raw(
    src_address: &SourceNet,
    src_port: Port,
    protocol: Protocol,
    dest_address: &DestAddr,
    dest_port: Option<Port>,
    comment: Option<&str>,
) -> String {
    let mut rule = Rule::new(*src_address, src_port, protocol, *dest_address)
        .with_dest_port(dest_port.unwrap_or(src_port));
    if let Some(comment) = comment {
        rule = rule.with_comment(comment);
    }
    Formatter::default().render(&rule)
}

/// Formats one command per source address and protocol with the default [RuleConfig].
///
/// With `format_comment` set the comment is expanded per rule, see [CommentTemplate].
pub fn format_commands<S: AsRef<str>>(
    src_addresses: &[S],
    src_port: Port,
    protocols: &[Protocol],
    dest_address: &str,
    dest_port: Option<Port>,
    comment: Option<&str>,
    format_comment: bool,
) -> Result<Vec<String>> {
    let rules = build_rules(
        src_addresses,
        src_port,
        protocols,
        dest_address,
        dest_port,
        comment,
        format_comment,
    )?;
    Ok(Formatter::default().render_all(&rules))
}
