use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Hld,
    Lld,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Hld => "hld",
            DocumentType::Lld => "lld",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            DocumentType::Hld => "HLD",
            DocumentType::Lld => "LLD",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            DocumentType::Hld => "High-Level Design",
            DocumentType::Lld => "Low-Level Design",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid documentType. Must be \"hld\" or \"lld\"")]
pub struct InvalidDocumentType;

impl FromStr for DocumentType {
    type Err = InvalidDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hld" => Ok(Self::Hld),
            "lld" => Ok(Self::Lld),
            _ => Err(InvalidDocumentType),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
