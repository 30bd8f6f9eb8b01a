use crafting_common::ItemKind;
use serde::{Deserialize, Serialize};

use crate::ledger::ItemEntry;

/// Data carried by a collectible world object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: ItemKind,
    #[serde(default)]
    pub is_rare: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Pickup {
    pub fn new(kind: impl Into<ItemKind>) -> Self {
        Self {
            kind: kind.into(),
            is_rare: false,
            display_name: None,
            description: None,
        }
    }

    pub fn rare(mut self) -> Self {
        self.is_rare = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Entry this pickup would create in an empty ledger.
    pub fn entry_template(&self) -> ItemEntry {
        ItemEntry {
            kind: self.kind.clone(),
            count: 1,
            is_rare: self.is_rare,
            display_name: self.display_name.clone(),
            description: self.description.clone(),
        }
    }
}
