use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The common pickup materials found in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommonType {
    Alcohol,
    Electrics,
    Scrap,
    Chemicals,
    MineralsAndElements,
    Biowaste,
}

impl CommonType {
    pub const ALL: [CommonType; 6] = [
        CommonType::Alcohol,
        CommonType::Electrics,
        CommonType::Scrap,
        CommonType::Chemicals,
        CommonType::MineralsAndElements,
        CommonType::Biowaste,
    ];

    /// Stable lowercase key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            CommonType::Alcohol => "alcohol",
            CommonType::Electrics => "electrics",
            CommonType::Scrap => "scrap",
            CommonType::Chemicals => "chemicals",
            CommonType::MineralsAndElements => "minerals_and_elements",
            CommonType::Biowaste => "biowaste",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            CommonType::Alcohol => "Alcohol",
            CommonType::Electrics => "Electrics",
            CommonType::Scrap => "Scrap",
            CommonType::Chemicals => "Chemicals",
            CommonType::MineralsAndElements => "Minerals and Elements",
            CommonType::Biowaste => "Biowaste",
        }
    }
}

/// Identifies what a pickup is, independent of how the host represents actors.
///
/// Ledger entries are keyed by this value: two pickups with equal kinds stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    Common(CommonType),
    /// Any other item, keyed by a free-form string.
    Named(String),
}

impl ItemKind {
    pub fn named(key: impl Into<String>) -> Self {
        Self::Named(key.into())
    }
}

impl From<CommonType> for ItemKind {
    fn from(value: CommonType) -> Self {
        Self::Common(value)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Common(common) => f.write_str(common.key()),
            ItemKind::Named(key) => write!(f, "named:{key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseItemKindError {
    #[error("empty item kind")]
    Empty,
}

impl FromStr for ItemKind {
    type Err = ParseItemKindError;

    /// Common keys map to `Common`; `named:<key>` and any other text map to `Named`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseItemKindError::Empty);
        }
        if let Some(key) = s.strip_prefix("named:") {
            if key.is_empty() {
                return Err(ParseItemKindError::Empty);
            }
            return Ok(Self::Named(key.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        Ok(CommonType::ALL
            .iter()
            .find(|c| c.key() == lower)
            .map(|c| Self::Common(*c))
            .unwrap_or_else(|| Self::Named(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_keys_parse() {
        for common in CommonType::ALL {
            let parsed: ItemKind = common.key().parse().unwrap();
            assert_eq!(parsed, ItemKind::Common(common));
        }
    }

    #[test]
    fn parse_is_case_insensitive_for_common() {
        assert_eq!(
            "Scrap".parse::<ItemKind>().unwrap(),
            ItemKind::Common(CommonType::Scrap)
        );
    }

    #[test]
    fn unknown_text_is_named() {
        assert_eq!(
            "copper_wire".parse::<ItemKind>().unwrap(),
            ItemKind::named("copper_wire")
        );
        assert_eq!(
            "named:scrap".parse::<ItemKind>().unwrap(),
            ItemKind::named("scrap")
        );
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!("  ".parse::<ItemKind>(), Err(ParseItemKindError::Empty));
        assert_eq!("named:".parse::<ItemKind>(), Err(ParseItemKindError::Empty));
    }

    #[test]
    fn display_matches_parse() {
        let kinds = [ItemKind::from(CommonType::Biowaste), ItemKind::named("lens")];
        for kind in kinds {
            assert_eq!(kind.to_string().parse::<ItemKind>().unwrap(), kind);
        }
    }
}
