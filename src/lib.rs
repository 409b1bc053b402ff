//! # itemforge
//!
//! A marker-tagged custom item engine for game plugin hosts.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The host owns the event loop, the crafting system,
//!    and what cancellation means. This crate only models items, markers,
//!    and the routing between them.
//!
//! 2. **No Hidden Globals**: The registry is an explicitly constructed value
//!    the host creates at startup and passes by reference. Lifecycle is the
//!    host's, not a static initializer's.
//!
//! 3. **Silent Non-Matches**: Most host events do not involve a tagged item.
//!    Dispatch resolves to zero invocations for untagged or unknown subjects
//!    and never raises.
//!
//! ## Architecture
//!
//! - **Marker Tagging**: Every custom item carries its behavior's marker
//!   string in its persistent data under one reserved, namespace-scoped key.
//!   The marker is written exactly once, at registration time.
//!
//! - **Registry Dispatch**: Incoming events are routed purely by reading the
//!   marker off each subject item and looking up the registered behavior.
//!
//! - **Structural Comparison**: `items::compare` decides whether one
//!   metadata snapshot is a superset of another, field by field.
//!
//! ## Modules
//!
//! - `items`: Item kinds, stacks, metadata, the fluent builder, comparison
//! - `events`: Host event kinds and subject extraction
//! - `behavior`: The `CustomItem` trait and recipe forwarding
//! - `registry`: Marker registry and event dispatch

pub mod behavior;
pub mod events;
pub mod items;
pub mod registry;

// Re-export commonly used types
pub use crate::items::{
    contains_all_meta, contains_all_meta_stacks, contains_all_meta_with, AttributeKind,
    AttributeModifier, DataKey, DataValue, Enchantment, ItemBuilder, ItemFlag, ItemKind, ItemMeta,
    ItemStack, ModelDataRule, ModifierOperation,
};

pub use crate::events::{EventKind, ItemEvent, SubjectArity, Subjects};

pub use crate::behavior::{CustomItem, Recipe, RecipeList, RecipeSink};

pub use crate::registry::{CollisionPolicy, ItemRegistry, RegistryError, MARKER_KEY};
