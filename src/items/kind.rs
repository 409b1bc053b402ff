//! Item kinds - static material descriptors.
//!
//! An `ItemKind` describes the fixed properties of a material ("iron_sword",
//! "apple"): how many fit in a stack, whether it takes damage, whether it can
//! be eaten. The builder consults these capabilities before applying a
//! mutation; an attribute the kind does not support is silently skipped.

use serde::{Deserialize, Serialize};

/// Static descriptor for an item kind (material).
///
/// ## Example
///
/// ```
/// use itemforge::items::ItemKind;
///
/// let sword = ItemKind::new("iron_sword")
///     .with_max_stack_size(1)
///     .with_max_durability(250);
///
/// assert!(sword.is_damageable());
/// assert!(!sword.is_edible());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemKind {
    /// Kind name ("iron_sword", "apple").
    pub name: String,

    /// Maximum items per stack.
    pub max_stack_size: u32,

    /// Maximum damage the item can absorb before breaking.
    /// `None` means the kind does not take damage.
    pub max_durability: Option<u32>,

    /// Whether the item can be consumed.
    pub edible: bool,
}

impl ItemKind {
    /// Create a new kind with default properties (stack of 64, not
    /// damageable, not edible).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_stack_size: 64,
            max_durability: None,
            edible: false,
        }
    }

    /// Set the maximum stack size (builder pattern).
    #[must_use]
    pub fn with_max_stack_size(mut self, size: u32) -> Self {
        self.max_stack_size = size.max(1);
        self
    }

    /// Mark the kind as damageable with the given durability (builder pattern).
    #[must_use]
    pub fn with_max_durability(mut self, durability: u32) -> Self {
        self.max_durability = Some(durability);
        self
    }

    /// Mark the kind as edible (builder pattern).
    #[must_use]
    pub fn edible(mut self) -> Self {
        self.edible = true;
        self
    }

    /// Whether items of this kind accept a durability/damage value.
    #[must_use]
    pub fn is_damageable(&self) -> bool {
        self.max_durability.is_some()
    }

    /// Whether items of this kind can be consumed.
    #[must_use]
    pub fn is_edible(&self) -> bool {
        self.edible
    }

    /// Whether more than one item of this kind fits in a stack.
    #[must_use]
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size > 1
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
