
use std::{fmt::Write, str::FromStr};

use strum_macros::EnumString;

use crate::{Error, Result, Rule};

/// Rule attribute that can be referenced from a comment template as `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
enum Field {
    SrcAddress,
    SrcPort,
    Protocol,
    DestAddress,
    DestPort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Comment text with `{field}` placeholders, parsed once and expanded per rule.
///
/// `{{` and `}}` stand for literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    segments: Vec<Segment>,
}

impl CommentTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(Error::UnmatchedBrace('{')),
                        }
                    }
                    let field = Field::from_str(&name).map_err(|_| Error::UnknownField(name))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(Error::UnmatchedBrace('}')),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Expands the template with the attributes of `rule`.
    pub fn render(&self, rule: &Rule) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            // Writing into a String can't fail.
            let _ = match segment {
                Segment::Literal(s) => write!(out, "{s}"),
                Segment::Field(Field::SrcAddress) => write!(out, "{}", rule.src_address()),
                Segment::Field(Field::SrcPort) => write!(out, "{}", rule.src_port()),
                Segment::Field(Field::Protocol) => write!(out, "{}", rule.protocol()),
                Segment::Field(Field::DestAddress) => write!(out, "{}", rule.dest_address()),
                Segment::Field(Field::DestPort) => write!(out, "{}", rule.dest_port()),
            };
        }
        out
    }

    /// Whether any placeholder is present.
    pub fn has_fields(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Field(_)))
    }
}

impl FromStr for CommentTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
