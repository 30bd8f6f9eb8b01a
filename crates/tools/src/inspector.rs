use crafting_character::Character;
use crafting_inventory::Ledger;
use crafting_ui::Panel;
use serde::Serialize;

/// Inventory inspector for developer tooling.
///
/// Provides read-only queries against a character for debugging and the CLI.
pub struct InventoryInspector;

impl InventoryInspector {
    /// Produce a summary of the character's inventory and UI state.
    pub fn summary(character: &Character) -> InventorySummary {
        let rotation = character.rotation().state();
        InventorySummary {
            entry_count: character.ledger().len(),
            total_items: character.ledger().total_items(),
            inventory_open: character.is_inventory_open(),
            active_panel: rotation.active_panel,
            current_angle: rotation.current_angle,
            animating: rotation.is_animating,
        }
    }

    /// One row per ledger entry, in pickup order.
    pub fn list_entries(ledger: &Ledger) -> Vec<EntryInfo> {
        ledger
            .entries()
            .iter()
            .map(|e| EntryInfo {
                key: e.kind.to_string(),
                label: e.label(),
                count: e.count,
                rare: e.is_rare,
            })
            .collect()
    }
}

/// Summary of inventory state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub entry_count: usize,
    pub total_items: u64,
    pub inventory_open: bool,
    pub active_panel: Panel,
    pub current_angle: f32,
    pub animating: bool,
}

impl std::fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Inventory: entries={} items={} open={} panel={} angle={:.1} animating={}",
            self.entry_count,
            self.total_items,
            self.inventory_open,
            self.active_panel,
            self.current_angle,
            self.animating
        )
    }
}

/// A single ledger row.
#[derive(Debug, Clone, Serialize)]
pub struct EntryInfo {
    pub key: String,
    pub label: String,
    pub count: u32,
    pub rare: bool,
}

impl std::fmt::Display for EntryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<24} x{:<4}", self.label, self.count)?;
        if self.rare {
            f.write_str(" (rare)")?;
        }
        Ok(())
    }
}
