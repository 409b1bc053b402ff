//! Item system: kinds, stacks, metadata, builder, and comparison.
//!
//! ## Key Types
//!
//! - `ItemKind`: static material descriptor with capability queries
//! - `ItemStack`: a runtime stack of items with metadata
//! - `ItemMeta`: the descriptive attribute snapshot on a stack
//! - `ItemBuilder`: fluent construction of stacks with metadata
//! - `compare`: structural superset comparison of snapshots
//!
//! The behavior marker is an ordinary persistent entry in `ItemMeta` under a
//! reserved `DataKey`; nothing in this module interprets it.

pub mod builder;
pub mod compare;
pub mod kind;
pub mod meta;
pub mod stack;

pub use builder::ItemBuilder;
pub use compare::{
    contains_all_meta, contains_all_meta_stacks, contains_all_meta_with, ModelDataRule,
};
pub use kind::ItemKind;
pub use meta::{
    AttributeKind, AttributeModifier, DataKey, DataValue, Enchantment, ItemFlag, ItemMeta,
    ModifierOperation,
};
pub use stack::ItemStack;
