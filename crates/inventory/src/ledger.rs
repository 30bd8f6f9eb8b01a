use crafting_common::ItemKind;
use serde::{Deserialize, Serialize};

use crate::observer::{ObserverId, Observers};
use crate::pickup::Pickup;

/// One stack of items of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub kind: ItemKind,
    pub count: u32,
    /// Copied from the first pickup of this kind; later pickups do not change it.
    pub is_rare: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemEntry {
    /// A single non-rare, unnamed item of `kind`.
    pub fn new(kind: impl Into<ItemKind>) -> Self {
        Self {
            kind: kind.into(),
            count: 1,
            is_rare: false,
            display_name: None,
            description: None,
        }
    }

    /// Display name, falling back to the kind's key.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => self.kind.to_string(),
        }
    }
}

/// Reasons a stored ledger is rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("entry for {0} has a count of zero")]
    ZeroCount(ItemKind),
    #[error("more than one entry for {0}")]
    DuplicateKind(ItemKind),
}

/// The per-player collection of item stacks.
///
/// Lookups are a linear scan by kind; entries keep pickup order so UI lists
/// stay stable. Observers are not serialized. Deserializing validates the
/// entries, so a loaded ledger holds the same invariants as a built one.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredLedger")]
pub struct Ledger {
    entries: Vec<ItemEntry>,
    #[serde(skip)]
    observers: Observers,
}

#[derive(Deserialize)]
struct StoredLedger {
    entries: Vec<ItemEntry>,
}

impl TryFrom<StoredLedger> for Ledger {
    type Error = LedgerError;

    fn try_from(stored: StoredLedger) -> Result<Self, LedgerError> {
        for (index, entry) in stored.entries.iter().enumerate() {
            if entry.count == 0 {
                return Err(LedgerError::ZeroCount(entry.kind.clone()));
            }
            if stored.entries[..index].iter().any(|e| e.kind == entry.kind) {
                return Err(LedgerError::DuplicateKind(entry.kind.clone()));
            }
        }
        Ok(Self {
            entries: stored.entries,
            observers: Observers::default(),
        })
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one item of `kind`. A new entry takes `is_rare` from this call.
    /// Returns the resulting count.
    pub fn increase(&mut self, kind: ItemKind, is_rare: bool) -> u32 {
        let template = ItemEntry {
            is_rare,
            ..ItemEntry::new(kind)
        };
        self.increase_entry(template)
    }

    /// Add one item described by `pickup`.
    pub fn increase_pickup(&mut self, pickup: &Pickup) -> u32 {
        self.increase_entry(pickup.entry_template())
    }

    /// Add one item using `template` for the insert path. The template's
    /// `count` is ignored.
    pub fn increase_entry(&mut self, template: ItemEntry) -> u32 {
        let count = match self.position(&template.kind) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.count += 1;
                tracing::debug!(kind = %entry.kind, count = entry.count, "item stacked");
                entry.count
            }
            None => {
                tracing::debug!(kind = %template.kind, rare = template.is_rare, "item added");
                self.entries.push(ItemEntry {
                    count: 1,
                    ..template
                });
                1
            }
        };
        self.observers.notify();
        count
    }

    /// Remove one item of `kind`. Returns the remaining count; 0 means the
    /// entry is gone or never existed.
    pub fn decrease(&mut self, kind: &ItemKind) -> u32 {
        let Some(index) = self.position(kind) else {
            return 0;
        };
        let remaining = if self.entries[index].count > 1 {
            let entry = &mut self.entries[index];
            entry.count -= 1;
            entry.count
        } else {
            self.entries.remove(index);
            0
        };
        tracing::debug!(%kind, remaining, "item removed");
        self.observers.notify();
        remaining
    }

    /// Remove one item of the pickup's kind.
    pub fn decrease_pickup(&mut self, pickup: &Pickup) -> u32 {
        self.decrease(&pickup.kind)
    }

    /// Remove one item of the entry's kind; its other fields are ignored.
    pub fn decrease_entry(&mut self, entry: &ItemEntry) -> u32 {
        self.decrease(&entry.kind)
    }

    /// Count held for `kind`, 0 if absent.
    pub fn count(&self, kind: &ItemKind) -> u32 {
        self.get(kind).map_or(0, |e| e.count)
    }

    /// The stored entry for `kind`, if any.
    pub fn get(&self, kind: &ItemKind) -> Option<&ItemEntry> {
        self.entries.iter().find(|e| &e.kind == kind)
    }

    /// Entries in pickup order.
    pub fn entries(&self) -> &[ItemEntry] {
        &self.entries
    }

    /// Number of distinct kinds held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    /// Register a change callback. It fires after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        self.observers.subscribe(callback)
    }

    /// Drop a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Callbacks currently registered.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn position(&self, kind: &ItemKind) -> Option<usize> {
        self.entries.iter().position(|e| &e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crafting_common::CommonType;
    use std::cell::Cell;
    use std::rc::Rc;

    fn scrap() -> ItemKind {
        CommonType::Scrap.into()
    }

    fn alcohol() -> ItemKind {
        CommonType::Alcohol.into()
    }

    fn counting(ledger: &mut Ledger) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let inner = hits.clone();
        ledger.subscribe(move || inner.set(inner.get() + 1));
        hits
    }

    #[test]
    fn pickup_scenario() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.increase(scrap(), false), 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].kind, scrap());
        assert_eq!(ledger.entries()[0].count, 1);

        assert_eq!(ledger.increase(scrap(), false), 2);
        assert_eq!(ledger.increase(alcohol(), false), 1);
        let order: Vec<&ItemKind> = ledger.entries().iter().map(|e| &e.kind).collect();
        assert_eq!(order, vec![&scrap(), &alcohol()]);

        assert_eq!(ledger.decrease(&scrap()), 1);
        assert_eq!(ledger.count(&scrap()), 1);
        assert_eq!(ledger.decrease(&scrap()), 0);
        let order: Vec<&ItemKind> = ledger.entries().iter().map(|e| &e.kind).collect();
        assert_eq!(order, vec![&alcohol()]);
    }

    #[test]
    fn decrease_absent_is_noop() {
        let mut ledger = Ledger::new();
        let hits = counting(&mut ledger);
        assert_eq!(ledger.decrease(&scrap()), 0);
        assert!(ledger.is_empty());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn increase_then_decrease_leaves_empty() {
        let mut ledger = Ledger::new();
        ledger.increase(alcohol(), true);
        ledger.decrease(&alcohol());
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_items(), 0);
    }

    #[test]
    fn every_mutation_notifies_once() {
        let mut ledger = Ledger::new();
        let hits = counting(&mut ledger);
        ledger.increase(scrap(), false);
        ledger.increase(scrap(), false);
        ledger.decrease(&scrap());
        ledger.decrease(&scrap());
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn rarity_comes_from_first_pickup() {
        let mut ledger = Ledger::new();
        ledger.increase(scrap(), true);
        ledger.increase(scrap(), false);
        assert!(ledger.get(&scrap()).unwrap().is_rare);
    }

    #[test]
    fn template_count_is_overwritten() {
        let mut ledger = Ledger::new();
        let template = ItemEntry {
            count: 40,
            display_name: Some("Ethanol".into()),
            description: Some("Flammable".into()),
            ..ItemEntry::new(CommonType::Alcohol)
        };
        assert_eq!(ledger.increase_entry(template.clone()), 1);
        let stored = ledger.get(&alcohol()).unwrap();
        assert_eq!(stored.count, 1);
        assert_eq!(stored.display_name.as_deref(), Some("Ethanol"));

        // Existing entry: descriptors of the new template are ignored.
        let other = ItemEntry {
            display_name: Some("Other".into()),
            ..template
        };
        assert_eq!(ledger.increase_entry(other), 2);
        assert_eq!(ledger.get(&alcohol()).unwrap().label(), "Ethanol");
    }

    #[test]
    fn counts_never_drop_below_one() {
        let mut ledger = Ledger::new();
        let kinds: Vec<ItemKind> = CommonType::ALL.iter().map(|c| (*c).into()).collect();
        // Deterministic pseudo-random walk over increase/decrease calls.
        let mut state: u32 = 7;
        for _ in 0..500 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let kind = &kinds[(state >> 16) as usize % kinds.len()];
            if state & 1 == 0 {
                ledger.increase(kind.clone(), false);
            } else {
                let before = ledger.count(kind);
                let after = ledger.decrease(kind);
                assert_eq!(after, before.saturating_sub(1));
                assert_eq!(ledger.get(kind).is_none(), after == 0);
            }
            assert!(ledger.entries().iter().all(|e| e.count >= 1));
            for kind in &kinds {
                assert!(ledger.entries().iter().filter(|e| &e.kind == kind).count() <= 1);
            }
        }
    }

    #[test]
    fn pickup_entry_points() {
        let mut ledger = Ledger::new();
        let pickup = Pickup::new(CommonType::Chemicals).with_name("Solvent").rare();
        assert_eq!(ledger.increase_pickup(&pickup), 1);
        assert_eq!(ledger.increase_pickup(&pickup), 2);
        assert_eq!(ledger.get(&pickup.kind).unwrap().label(), "Solvent");
        assert_eq!(ledger.decrease_pickup(&pickup), 1);
        let entry = ledger.get(&pickup.kind).unwrap().clone();
        assert_eq!(ledger.decrease_entry(&entry), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn named_kinds_stack_by_key() {
        let mut ledger = Ledger::new();
        ledger.increase(ItemKind::named("lens"), false);
        ledger.increase("named:lens".parse().unwrap(), false);
        assert_eq!(ledger.count(&ItemKind::named("lens")), 2);
    }

    #[test]
    fn serializes_entries_only() {
        let mut ledger = Ledger::new();
        ledger.subscribe(|| {});
        ledger.increase(scrap(), false);
        let json = serde_json::to_string(&ledger).unwrap();
        let restored: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), ledger.entries());
        assert_eq!(restored.observer_count(), 0);
    }

    #[test]
    fn load_rejects_zero_count() {
        let empty = ItemEntry {
            count: 0,
            ..ItemEntry::new(CommonType::Scrap)
        };
        let json = serde_json::json!({ "entries": [empty] });
        let err = serde_json::from_value::<Ledger>(json).unwrap_err();
        assert!(err.to_string().contains("count of zero"));
    }

    #[test]
    fn load_rejects_duplicate_kinds() {
        let first = ItemEntry::new(CommonType::Scrap);
        let second = ItemEntry {
            count: 2,
            ..ItemEntry::new(CommonType::Scrap)
        };
        let json = serde_json::json!({ "entries": [first, second] });
        let err = serde_json::from_value::<Ledger>(json).unwrap_err();
        assert!(err.to_string().contains("more than one entry"));
    }
}
