//=========================================================================
// Inventory View & Slot Resolver
//=========================================================================
//
// Read-only window onto the host inventory and the per-tick mapping
// from hotkey index to (slot, item snapshot).
//
// Only three item properties matter to arbitration: whether the slot is
// occupied, and whether the item auto-reuses or channels. Everything else
// about the item stays with the host.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::hotkeys::HotkeyConfig;

//=== ItemSnapshot ========================================================

/// The item properties arbitration consumes, copied out of the host item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemSnapshot {
    pub occupied: bool,
    pub auto_reuse: bool,
    pub channel: bool,
}

impl ItemSnapshot {
    /// Empty slot.
    pub const EMPTY: Self = Self { occupied: false, auto_reuse: false, channel: false };

    /// Item used once per press.
    pub const fn one_shot() -> Self {
        Self { occupied: true, auto_reuse: false, channel: false }
    }

    /// Item that keeps swinging while use is held.
    pub const fn auto_reuse() -> Self {
        Self { occupied: true, auto_reuse: true, channel: false }
    }

    /// Item held down for a continuous effect.
    pub const fn channeled() -> Self {
        Self { occupied: true, auto_reuse: false, channel: true }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Autoswing and channeled items both keep their key's priority while held.
    pub fn is_reusable(&self) -> bool {
        self.auto_reuse || self.channel
    }
}

//=== InventoryView =======================================================

/// Read-only inventory access.
pub trait InventoryView {
    /// Item in `slot`, or `None` when the slot does not exist.
    fn item(&self, slot: usize) -> Option<ItemSnapshot>;
}

impl InventoryView for [ItemSnapshot] {
    fn item(&self, slot: usize) -> Option<ItemSnapshot> {
        self.get(slot).copied()
    }
}

impl InventoryView for Vec<ItemSnapshot> {
    fn item(&self, slot: usize) -> Option<ItemSnapshot> {
        self.as_slice().item(slot)
    }
}

impl<const N: usize> InventoryView for [ItemSnapshot; N] {
    fn item(&self, slot: usize) -> Option<ItemSnapshot> {
        self.as_slice().item(slot)
    }
}

//=== SlotResolver ========================================================

/// One hotkey's target this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlot {
    /// Binding index.
    pub index: usize,

    /// Inventory slot bound to the hotkey.
    pub slot: usize,

    /// What is in that slot right now.
    pub item: ItemSnapshot,
}

impl ResolvedSlot {
    /// A hotkey is only worth queueing when its slot holds something.
    pub fn is_eligible(&self) -> bool {
        self.item.is_occupied()
    }
}

/// Maps the binding table onto the current inventory contents.
pub struct SlotResolver;

impl SlotResolver {
    /// Resolves every binding, index-aligned with the table.
    ///
    /// Missing slots resolve to [`ItemSnapshot::EMPTY`].
    pub fn resolve<V: InventoryView + ?Sized>(
        config: &HotkeyConfig,
        inventory: &V,
    ) -> Vec<ResolvedSlot> {
        config
            .bindings()
            .iter()
            .map(|binding| ResolvedSlot {
                index: binding.index(),
                slot: binding.bound_slot(),
                item: inventory.item(binding.bound_slot()).unwrap_or(ItemSnapshot::EMPTY),
            })
            .collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hotbar() -> Vec<ItemSnapshot> {
        let mut items = vec![ItemSnapshot::EMPTY; 10];
        items[4] = ItemSnapshot::one_shot();
        items[5] = ItemSnapshot::auto_reuse();
        items[6] = ItemSnapshot::channeled();
        items
    }

    #[test]
    fn reusable_covers_autoswing_and_channel() {
        assert!(!ItemSnapshot::one_shot().is_reusable());
        assert!(ItemSnapshot::auto_reuse().is_reusable());
        assert!(ItemSnapshot::channeled().is_reusable());
        assert!(!ItemSnapshot::EMPTY.is_occupied());
    }

    #[test]
    fn resolves_bindings_in_table_order() {
        let config = HotkeyConfig::builder()
            .bind(6, "C")
            .bind(4, "F")
            .bind(7, "X")
            .build()
            .unwrap();

        let resolved = SlotResolver::resolve(&config, &hotbar());

        assert_eq!(
            resolved,
            vec![
                ResolvedSlot { index: 0, slot: 6, item: ItemSnapshot::channeled() },
                ResolvedSlot { index: 1, slot: 4, item: ItemSnapshot::one_shot() },
                ResolvedSlot { index: 2, slot: 7, item: ItemSnapshot::EMPTY },
            ]
        );
        assert!(!resolved[2].is_eligible());
    }

    #[test]
    fn slot_past_inventory_end_is_empty() {
        let config = HotkeyConfig::builder().bind(42, "F").build().unwrap();
        let resolved = SlotResolver::resolve(&config, &[ItemSnapshot::one_shot(); 3]);
        assert_eq!(resolved[0].item, ItemSnapshot::EMPTY);
    }

    /// Contents are read fresh on every call.
    #[test]
    fn resolution_tracks_inventory_changes() {
        let config = HotkeyConfig::builder().bind(4, "F").build().unwrap();
        let mut items = hotbar();

        assert!(SlotResolver::resolve(&config, &items)[0].is_eligible());
        items[4] = ItemSnapshot::EMPTY;
        assert!(!SlotResolver::resolve(&config, &items)[0].is_eligible());
    }
}
