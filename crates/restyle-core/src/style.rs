use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RestyleError;

/// Rewrite style requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Casual,
    Proofread,
    #[default]
    Professional,
    Persuasive,
    Freestyle,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Casual,
        Style::Proofread,
        Style::Professional,
        Style::Persuasive,
        Style::Freestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Proofread => "proofread",
            Style::Professional => "professional",
            Style::Persuasive => "persuasive",
            Style::Freestyle => "freestyle",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "casual" => Some(Style::Casual),
            "proofread" => Some(Style::Proofread),
            "professional" => Some(Style::Professional),
            "persuasive" => Some(Style::Persuasive),
            "freestyle" => Some(Style::Freestyle),
            _ => None,
        }
    }

    /// Phrase completing "making it more ..." in the improve template.
    ///
    /// Freestyle has no phrase of its own; the caller supplies instructions.
    pub fn description(&self) -> &'static str {
        match self {
            Style::Casual => {
                "Casual, friendly, human like, everyday language with contractions and simple words"
            }
            Style::Proofread => {
                "Proofread the text for any errors and make sure it is grammatically correct. \
                 Do not change the meaning of the text."
            }
            Style::Professional => "Business-appropriate language that's clear and direct",
            Style::Persuasive => "Compelling language that drives action",
            Style::Freestyle => "",
        }
    }

    /// Whether the style needs caller-provided instructions.
    pub fn requires_instructions(&self) -> bool {
        matches!(self, Style::Freestyle)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = RestyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse_str(s).ok_or_else(|| RestyleError::InvalidInput(format!("Unknown style: {s}")))
    }
}
