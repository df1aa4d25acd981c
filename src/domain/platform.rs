use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cloud platform the generated design targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Aws,
    Azure,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Aws => "aws",
            Platform::Azure => "azure",
        }
    }

    /// Short label used inside sentences and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Aws => "AWS",
            Platform::Azure => "Azure",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Aws => "Amazon Web Services (AWS)",
            Platform::Azure => "Microsoft Azure",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            Platform::Aws => "FF9900",
            Platform::Azure => "0078D4",
        }
    }

    pub fn is_aws(&self) -> bool {
        matches!(self, Platform::Aws)
    }

    /// Picks the AWS or Azure flavour of a value.
    pub fn pick<T>(&self, aws: T, azure: T) -> T {
        match self {
            Platform::Aws => aws,
            Platform::Azure => azure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid platform. Must be \"aws\" or \"azure\"")]
pub struct InvalidPlatform;

impl FromStr for Platform {
    type Err = InvalidPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            _ => Err(InvalidPlatform),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
