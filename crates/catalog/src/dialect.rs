//! Comment dialect detection and tag matchers
//!
//! A catalog marks its entries with comment lines in one of four styles:
//!
//! ```text
//! -- start: name        ## start: name        // start: name        /* start: name */
//! ...                   ...                   ...                   ...
//! -- end: name          ## end: name          // end: name          /* end: name */
//! ```
//!
//! The style is picked from the first two characters of the first tagged
//! line and stays fixed for the rest of the document.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Comment syntax used for entry tag lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// SQL/Ada line comments: `-- start: name`
    DoubleDash,
    /// Doubled hash line comments: `## start: name`
    DoubleHash,
    /// C++ line comments: `// start: name`
    DoubleSlash,
    /// C block comments: `/* start: name */`
    Block,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::DoubleDash,
        Dialect::DoubleHash,
        Dialect::DoubleSlash,
        Dialect::Block,
    ];

    /// Look up the dialect whose opener is exactly `prefix`.
    pub fn from_opener(prefix: &str) -> Option<Self> {
        match prefix {
            "--" => Some(Self::DoubleDash),
            "##" => Some(Self::DoubleHash),
            "//" => Some(Self::DoubleSlash),
            "/*" => Some(Self::Block),
            _ => None,
        }
    }

    /// Detect the dialect from the first tagged line of a catalog.
    pub fn resolve(line: &str) -> Result<Self> {
        line.get(..2)
            .and_then(Self::from_opener)
            .ok_or_else(|| Error::UnknownDialect {
                prefix: line.chars().take(2).collect(),
            })
    }

    /// Marker every tag line starts with
    pub fn opener(self) -> &'static str {
        match self {
            Self::DoubleDash => "--",
            Self::DoubleHash => "##",
            Self::DoubleSlash => "//",
            Self::Block => "/*",
        }
    }

    /// Marker every tag line ends with, for block comments
    pub fn closer(self) -> Option<&'static str> {
        match self {
            Self::Block => Some("*/"),
            Self::DoubleDash | Self::DoubleHash | Self::DoubleSlash => None,
        }
    }

    /// Render a start tag line for `name`.
    pub fn format_start(self, name: &str) -> String {
        self.format_tag("start", name)
    }

    /// Render an end tag line for `name`.
    pub fn format_end(self, name: &str) -> String {
        self.format_tag("end", name)
    }

    fn format_tag(self, label: &str, name: &str) -> String {
        match self.closer() {
            Some(closer) => format!("{} {label}: {name} {closer}", self.opener()),
            None => format!("{} {label}: {name}", self.opener()),
        }
    }

    /// Build the start and end tag matchers for this dialect.
    pub fn matchers(self) -> Result<TagMatchers> {
        Ok(TagMatchers {
            dialect: self,
            start: self.tag_pattern("start")?,
            end: self.tag_pattern("end")?,
        })
    }

    fn tag_pattern(self, label: &str) -> Result<Regex> {
        let mut pattern = format!(r"^{}\s+{label}\s?:\s*(.*?)", regex::escape(self.opener()));
        if let Some(closer) = self.closer() {
            pattern.push_str(r"\s+");
            pattern.push_str(&regex::escape(closer));
        }
        pattern.push_str(r"\s*$");

        Ok(Regex::new(&pattern)?)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.closer() {
            Some(closer) => write!(f, "{} ... {closer}", self.opener()),
            None => f.write_str(self.opener()),
        }
    }
}

/// Compiled start/end tag recognizers for one dialect.
#[derive(Debug, Clone)]
pub struct TagMatchers {
    dialect: Dialect,
    start: Regex,
    end: Regex,
}

impl TagMatchers {
    /// Detect the dialect of `line` and compile its matchers.
    pub fn resolve(line: &str) -> Result<Self> {
        Dialect::resolve(line)?.matchers()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The name on a start tag line, or `None` if `line` is not one.
    ///
    /// A tag with nothing after the colon yields `Some("")`.
    pub fn start_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture_name(&self.start, line)
    }

    /// The name on an end tag line, or `None` if `line` is not one.
    pub fn end_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture_name(&self.end, line)
    }
}

fn capture_name<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}
