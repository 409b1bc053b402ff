//! Fluent builder for item stacks.
//!
//! `ItemBuilder` accumulates metadata against one backing stack and commits
//! it with `result()`. Setters are best-effort by contract: blank or empty
//! input is skipped, and so is any attribute the item's kind has no
//! capability for (durability on a kind that takes no damage, for example).
//! A skipped setter never fails - it just returns the builder unchanged, so
//! call chains stay composable regardless of caller-supplied optionality.
//!
//! `result()` is idempotent: it commits the accumulated metadata onto a copy
//! of the backing stack without consuming builder state, so calling it twice
//! yields the same committed item.

use rustc_hash::FxHashMap;

use super::kind::ItemKind;
use super::meta::{
    AttributeKind, AttributeModifier, DataKey, DataValue, Enchantment, ItemFlag, ItemMeta,
};
use super::stack::ItemStack;

/// Builder for an `ItemStack` with accumulated metadata.
///
/// ## Example
///
/// ```
/// use itemforge::items::{Enchantment, ItemBuilder, ItemKind};
///
/// let sword = ItemBuilder::new(ItemKind::new("iron_sword").with_max_durability(250))
///     .name("Magic Sword")
///     .add_lore_line("Forged in the depths.")
///     .add_enchantment(Enchantment::Sharpness, 3)
///     .durability(10)
///     .result();
///
/// assert_eq!(sword.meta().display_name.as_deref(), Some("Magic Sword"));
/// assert_eq!(sword.damage(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct ItemBuilder {
    stack: ItemStack,
    meta: ItemMeta,
}

impl ItemBuilder {
    /// Create a builder for the given kind.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            stack: ItemStack::new(kind),
            meta: ItemMeta::new(),
        }
    }

    /// Commit the accumulated metadata and return the finished stack.
    ///
    /// Does not reset builder state; a second call returns the same
    /// committed item again.
    #[must_use]
    pub fn result(&self) -> ItemStack {
        let mut stack = self.stack.clone();
        stack.set_meta(self.meta.clone());
        stack
    }

    /// Set the display name. Blank names are skipped.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            return self;
        }
        self.meta.display_name = Some(name);
        self
    }

    /// Set the stack amount. Zero is skipped; larger amounts clamp to the
    /// kind's maximum stack size.
    #[must_use]
    pub fn amount(mut self, amount: u32) -> Self {
        if amount == 0 {
            return self;
        }
        self.stack.set_amount(amount);
        self
    }

    /// Replace the lore lines. Empty input is skipped.
    #[must_use]
    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return self;
        }
        self.meta.lore = lines;
        self
    }

    /// Append one lore line. Blank lines are skipped.
    #[must_use]
    pub fn add_lore_line(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if line.trim().is_empty() {
            return self;
        }
        self.meta.lore.push(line);
        self
    }

    /// Add one enchantment at the given level.
    #[must_use]
    pub fn add_enchantment(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.meta.enchantments.insert(enchantment, level);
        self
    }

    /// Add several enchantments. Empty input is skipped.
    #[must_use]
    pub fn add_enchantments(mut self, enchantments: FxHashMap<Enchantment, u32>) -> Self {
        for (enchantment, level) in enchantments {
            self.meta.enchantments.insert(enchantment, level);
        }
        self
    }

    /// Add one display flag.
    #[must_use]
    pub fn add_flag(mut self, flag: ItemFlag) -> Self {
        self.meta.flags.insert(flag);
        self
    }

    /// Add several display flags.
    #[must_use]
    pub fn add_flags<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = ItemFlag>,
    {
        self.meta.flags.extend(flags);
        self
    }

    /// Add one attribute modifier entry.
    #[must_use]
    pub fn add_attribute_modifier(
        mut self,
        kind: AttributeKind,
        modifier: AttributeModifier,
    ) -> Self {
        self.meta.add_modifier(kind, modifier);
        self
    }

    /// Add several attribute modifier entries.
    #[must_use]
    pub fn add_attribute_modifiers<I>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = (AttributeKind, AttributeModifier)>,
    {
        for (kind, modifier) in modifiers {
            self.meta.add_modifier(kind, modifier);
        }
        self
    }

    /// Set the custom model tag.
    #[must_use]
    pub fn custom_model_data(mut self, data: i32) -> Self {
        self.meta.custom_model_data = Some(data);
        self
    }

    /// Set accumulated damage. Skipped unless the kind is damageable.
    #[must_use]
    pub fn durability(mut self, damage: u32) -> Self {
        if !self.stack.kind().is_damageable() {
            return self;
        }
        self.stack.set_damage(damage);
        self
    }

    /// Add one persistent data entry. Blank keys are skipped.
    #[must_use]
    pub fn add_persistent_data(mut self, key: DataKey, value: DataValue) -> Self {
        if key.namespace.trim().is_empty() || key.key.trim().is_empty() {
            return self;
        }
        self.meta.set_data(key, value);
        self
    }

    /// Add several persistent data entries. Empty input is skipped.
    #[must_use]
    pub fn add_persistent_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (DataKey, DataValue)>,
    {
        for (key, value) in entries {
            self = self.add_persistent_data(key, value);
        }
        self
    }
}
