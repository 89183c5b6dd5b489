//! Shared rule options

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One level of indentation: a number of spaces or a single tab.
///
/// Deserializes from a number (`2`) or the string `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndent", into = "RawIndent")]
pub enum IndentUnit {
    Spaces(u32),
    Tab,
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

impl IndentUnit {
    /// The whitespace for one indentation level
    pub fn as_whitespace(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(*width as usize),
            Self::Tab => "\t".to_string(),
        }
    }

    fn unit_name(&self) -> &'static str {
        match self {
            Self::Spaces(_) => "space",
            Self::Tab => "tab",
        }
    }

    /// Describe a run of indentation whitespace for a message, counting
    /// spaces and tabs separately, e.g. `4 spaces` or `2 spaces and 1 tab`
    pub fn describe(&self, indent: &str) -> String {
        let spaces = indent.chars().filter(|c| *c == ' ').count();
        let tabs = indent.chars().filter(|c| *c == '\t').count();

        match (spaces, tabs) {
            (0, 0) => pluralize(0, self.unit_name()),
            (spaces, 0) => pluralize(spaces, "space"),
            (0, tabs) => pluralize(tabs, "tab"),
            (spaces, tabs) => {
                format!("{} and {}", pluralize(spaces, "space"), pluralize(tabs, "tab"))
            }
        }
    }
}

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u32),
    Keyword(String),
}

impl TryFrom<RawIndent> for IndentUnit {
    type Error = ConfigError;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(0) => Err(ConfigError::ZeroIndentWidth),
            RawIndent::Width(width) => Ok(Self::Spaces(width)),
            RawIndent::Keyword(keyword) if keyword == "tab" => Ok(Self::Tab),
            RawIndent::Keyword(keyword) => Err(ConfigError::UnknownIndentKeyword(keyword)),
        }
    }
}

impl From<IndentUnit> for RawIndent {
    fn from(unit: IndentUnit) -> Self {
        match unit {
            IndentUnit::Spaces(width) => Self::Width(width),
            IndentUnit::Tab => Self::Keyword("tab".to_string()),
        }
    }
}
