//! Item stacks - the runtime objects the dispatcher inspects.
//!
//! An `ItemStack` pairs a static `ItemKind` with an amount, accumulated
//! damage, and the `ItemMeta` snapshot. The behavior marker is an ordinary
//! persistent entry on the meta; `marker()` is the read the dispatcher does
//! for every event subject.

use serde::{Deserialize, Serialize};

use super::kind::ItemKind;
use super::meta::{DataKey, DataValue, ItemMeta};

/// A stack of items of one kind, with its metadata snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    kind: ItemKind,
    amount: u32,
    damage: u32,
    meta: ItemMeta,
}

impl ItemStack {
    /// Create a single item of the given kind with empty metadata.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            amount: 1,
            damage: 0,
            meta: ItemMeta::new(),
        }
    }

    /// The item's kind.
    #[must_use]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Items in the stack.
    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Set the stack amount, clamped to the kind's maximum.
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount.max(1).min(self.kind.max_stack_size.max(1));
    }

    /// Accumulated damage. Always 0 for kinds that are not damageable.
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Set accumulated damage. Ignored for kinds that are not damageable;
    /// otherwise clamped to the kind's maximum durability.
    pub fn set_damage(&mut self, damage: u32) {
        if let Some(max) = self.kind.max_durability {
            self.damage = damage.min(max);
        }
    }

    /// The metadata snapshot.
    #[must_use]
    pub fn meta(&self) -> &ItemMeta {
        &self.meta
    }

    /// Mutable access to the metadata snapshot.
    pub fn meta_mut(&mut self) -> &mut ItemMeta {
        &mut self.meta
    }

    /// Replace the metadata snapshot wholesale.
    pub fn set_meta(&mut self, meta: ItemMeta) {
        self.meta = meta;
    }

    /// Read the behavior marker stored under the given reserved key.
    ///
    /// Returns `None` when the key is absent or holds a non-text value -
    /// either way the item is not a tagged item.
    #[must_use]
    pub fn marker(&self, key: &DataKey) -> Option<&str> {
        self.meta.data(key).and_then(DataValue::as_text)
    }
}
