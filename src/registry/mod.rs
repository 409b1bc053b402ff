//! Behavior registry and event dispatch.
//!
//! `ItemRegistry` owns the marker-to-behavior mapping. It is an explicitly
//! constructed value the host creates at startup and passes wherever events
//! arrive - there is no hidden global. Registration is a startup-phase
//! activity; the map is read-only during dispatch.
//!
//! ## Dispatch policy
//!
//! Dispatch never fails. A subject without a marker, with a marker nobody
//! registered, or an event without subjects simply produces no hook
//! invocation - most host events do not involve tagged items, so "no match"
//! is the common case, not an error. Only structural misuse of registration
//! (blank markers, collisions under the `Reject` policy) is surfaced as a
//! `RegistryError`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::behavior::{CustomItem, RecipeSink};
use crate::events::{EventKind, ItemEvent};
use crate::items::{DataKey, DataValue, ItemStack};

/// The reserved key name the marker is stored under, scoped per registry
/// by the host's namespace.
pub const MARKER_KEY: &str = "custom_item";

/// Errors from behavior registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The behavior declared a blank marker.
    #[error("behavior marker must not be blank")]
    EmptyMarker,

    /// A behavior is already registered under this marker and the registry
    /// uses `CollisionPolicy::Reject`.
    #[error("marker `{0}` is already registered")]
    DuplicateMarker(String),
}

/// What happens when a behavior registers under an existing marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Replace the previous registration silently.
    Overwrite,
    /// Replace the previous registration and log a warning.
    #[default]
    Warn,
    /// Refuse with `RegistryError::DuplicateMarker`.
    Reject,
}

/// One registered behavior with its frozen item template.
struct Registration {
    template: ItemStack,
    behavior: Box<dyn CustomItem>,
}

/// Marker-to-behavior registry and event dispatcher.
///
/// ## Example
///
/// ```
/// use itemforge::behavior::{CustomItem, RecipeList};
/// use itemforge::events::{EventKind, ItemEvent};
/// use itemforge::items::{ItemBuilder, ItemKind};
/// use itemforge::registry::ItemRegistry;
///
/// struct MagicSword;
///
/// impl CustomItem for MagicSword {
///     fn marker(&self) -> &str {
///         "MagicSword"
///     }
///
///     fn create_item_data(&self) -> ItemBuilder {
///         ItemBuilder::new(ItemKind::new("iron_sword")).name("Magic Sword")
///     }
/// }
///
/// let mut registry = ItemRegistry::new("myplugin");
/// let mut recipes = RecipeList::new();
/// registry.register(Box::new(MagicSword), &mut recipes).unwrap();
///
/// let sword = registry.template("MagicSword").unwrap().clone();
/// let mut event = ItemEvent::single(EventKind::Interact, sword);
/// assert_eq!(registry.dispatch(&mut event), 1);
/// ```
pub struct ItemRegistry {
    data_key: DataKey,
    entries: FxHashMap<String, Registration>,
    collisions: CollisionPolicy,
}

impl ItemRegistry {
    /// Create a registry whose marker key is scoped to the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            data_key: DataKey::new(namespace, MARKER_KEY),
            entries: FxHashMap::default(),
            collisions: CollisionPolicy::default(),
        }
    }

    /// Set the marker collision policy (builder pattern).
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// The reserved key markers are stored under.
    #[must_use]
    pub fn data_key(&self) -> &DataKey {
        &self.data_key
    }

    /// Register a behavior under its declared marker.
    ///
    /// Builds the behavior's item template, stamps the marker into its
    /// persistent data, forwards the behavior's recipes to `recipes`, and
    /// inserts the entry. Blank markers are rejected; collisions follow the
    /// registry's `CollisionPolicy`.
    pub fn register(
        &mut self,
        behavior: Box<dyn CustomItem>,
        recipes: &mut dyn RecipeSink,
    ) -> Result<(), RegistryError> {
        let marker = behavior.marker().to_string();
        if marker.trim().is_empty() {
            return Err(RegistryError::EmptyMarker);
        }

        if self.entries.contains_key(&marker) {
            match self.collisions {
                CollisionPolicy::Reject => {
                    return Err(RegistryError::DuplicateMarker(marker));
                }
                CollisionPolicy::Warn => {
                    tracing::warn!(marker = %marker, "overwriting registered behavior");
                }
                CollisionPolicy::Overwrite => {}
            }
        }

        let template = behavior
            .create_item_data()
            .add_persistent_data(self.data_key.clone(), DataValue::Text(marker.clone()))
            .result();

        for recipe in behavior.recipes() {
            recipes.add_recipe(recipe);
        }

        tracing::debug!(marker = %marker, "registered custom item behavior");
        self.entries.insert(marker, Registration { template, behavior });
        Ok(())
    }

    /// The frozen item template registered under a marker.
    #[must_use]
    pub fn template(&self, marker: &str) -> Option<&ItemStack> {
        self.entries.get(marker).map(|entry| &entry.template)
    }

    /// Resolve an item stack to its registered behavior, if it carries a
    /// known marker.
    #[must_use]
    pub fn resolve(&self, item: &ItemStack) -> Option<&dyn CustomItem> {
        let marker = item.marker(&self.data_key)?;
        self.entries.get(marker).map(|entry| entry.behavior.as_ref())
    }

    /// Whether a behavior is registered under a marker.
    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.entries.contains_key(marker)
    }

    /// Number of registered behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no behaviors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the registered markers.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Dispatch one host event.
    ///
    /// Each subject resolves independently, in host order; the hook matching
    /// `event.kind` runs once per matched subject and receives the whole
    /// event mutably. Returns the number of hook invocations - zero when no
    /// subject carries a registered marker, which is the common case and
    /// never an error.
    pub fn dispatch(&self, event: &mut ItemEvent) -> usize {
        // Markers are resolved up front so hooks can mutate the event
        // (including its subjects) without affecting sibling resolution.
        let markers: SmallVec<[Option<String>; 2]> = event
            .subjects
            .iter()
            .map(|item| item.marker(&self.data_key).map(str::to_owned))
            .collect();

        let kind = event.kind;
        let mut invoked = 0;
        for marker in markers {
            let Some(marker) = marker else { continue };
            let Some(entry) = self.entries.get(&marker) else { continue };
            invoke_hook(entry.behavior.as_ref(), kind, event);
            invoked += 1;
        }
        invoked
    }
}

impl std::fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("data_key", &self.data_key)
            .field("markers", &self.entries.keys().collect::<Vec<_>>())
            .field("collisions", &self.collisions)
            .finish()
    }
}

/// Forward an event to the hook matching its kind.
fn invoke_hook(behavior: &dyn CustomItem, kind: EventKind, event: &mut ItemEvent) {
    match kind {
        EventKind::Interact => behavior.on_interact(event),
        EventKind::Consume => behavior.on_consume(event),
        EventKind::ItemMerge => behavior.on_item_merge(event),
        EventKind::ItemSpawn => behavior.on_item_spawn(event),
        EventKind::ItemDespawn => behavior.on_item_despawn(event),
        EventKind::Craft => behavior.on_item_craft(event),
        EventKind::Smith => behavior.on_item_smith(event),
        EventKind::BlockDrop => behavior.on_block_drop_item(event),
        EventKind::HeldItemChange => behavior.on_held_item_change(event),
        EventKind::ItemMend => behavior.on_item_mend(event),
        EventKind::Enchant => behavior.on_enchant_item(event),
        EventKind::EntityDropItem => behavior.on_entity_drop_item(event),
        EventKind::PlayerDropItem => behavior.on_player_drop_item(event),
        EventKind::ItemBreak => behavior.on_item_break(event),
        EventKind::EntityPickupItem => behavior.on_entity_pickup_item(event),
        EventKind::ItemDamage => behavior.on_item_damage(event),
        EventKind::Compost => behavior.on_compost_item(event),
        EventKind::PrepareCraft => behavior.on_prepare_craft(event),
        EventKind::InventoryMoveItem => behavior.on_inventory_move_item(event),
        EventKind::SwapHandItems => behavior.on_swap_hand_items(event),
        EventKind::InventoryPickupItem => behavior.on_inventory_pickup_item(event),
        EventKind::Cartography => behavior.on_cartography_item(event),
        EventKind::PrepareEnchant => behavior.on_prepare_enchant(event),
        EventKind::PickBlock => behavior.on_pick_block(event),
        EventKind::AttemptPickupItem => behavior.on_attempt_pickup_item(event),
        EventKind::EntityDamageItem => behavior.on_entity_damage_item(event),
        EventKind::EntityCompost => behavior.on_entity_compost_item(event),
        EventKind::ItemCooldown => behavior.on_item_cooldown(event),
        EventKind::StopUsingItem => behavior.on_stop_using_item(event),
        EventKind::ItemFrameChange => behavior.on_item_frame_change(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::RecipeList;
    use crate::items::{ItemBuilder, ItemKind};

    struct Named(&'static str);

    impl CustomItem for Named {
        fn marker(&self) -> &str {
            self.0
        }

        fn create_item_data(&self) -> ItemBuilder {
            ItemBuilder::new(ItemKind::new("stone"))
        }
    }

    #[test]
    fn test_register_stamps_marker() {
        let mut registry = ItemRegistry::new("myplugin");
        let mut recipes = RecipeList::new();

        registry.register(Box::new(Named("Gem")), &mut recipes).unwrap();

        let template = registry.template("Gem").unwrap();
        assert_eq!(template.marker(registry.data_key()), Some("Gem"));
        assert!(registry.contains("Gem"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_blank_marker_rejected() {
        let mut registry = ItemRegistry::new("myplugin");
        let mut recipes = RecipeList::new();

        let err = registry
            .register(Box::new(Named("  ")), &mut recipes)
            .unwrap_err();
        assert_eq!(err, RegistryError::EmptyMarker);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collision_reject() {
        let mut registry =
            ItemRegistry::new("myplugin").with_collision_policy(CollisionPolicy::Reject);
        let mut recipes = RecipeList::new();

        registry.register(Box::new(Named("Gem")), &mut recipes).unwrap();
        let err = registry
            .register(Box::new(Named("Gem")), &mut recipes)
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateMarker("Gem".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collision_overwrite_replaces_entry() {
        struct Renamed;

        impl CustomItem for Renamed {
            fn marker(&self) -> &str {
                "Gem"
            }

            fn create_item_data(&self) -> ItemBuilder {
                ItemBuilder::new(ItemKind::new("stone")).name("Shiny Gem")
            }
        }

        let mut registry =
            ItemRegistry::new("myplugin").with_collision_policy(CollisionPolicy::Overwrite);
        let mut recipes = RecipeList::new();

        registry.register(Box::new(Named("Gem")), &mut recipes).unwrap();
        registry.register(Box::new(Renamed), &mut recipes).unwrap();

        assert_eq!(registry.len(), 1);
        let template = registry.template("Gem").unwrap();
        assert_eq!(template.meta().display_name.as_deref(), Some("Shiny Gem"));
    }

    #[test]
    fn test_resolve_unknown_marker() {
        let registry = ItemRegistry::new("myplugin");

        let mut item = ItemStack::new(ItemKind::new("stone"));
        assert!(registry.resolve(&item).is_none());

        item.meta_mut().set_data(
            registry.data_key().clone(),
            DataValue::Text("Unknown".into()),
        );
        assert!(registry.resolve(&item).is_none());
    }

    #[test]
    fn test_foreign_namespace_marker_ignored() {
        let mut registry = ItemRegistry::new("myplugin");
        let mut recipes = RecipeList::new();
        registry.register(Box::new(Named("Gem")), &mut recipes).unwrap();

        // Same key name, different namespace: not our marker.
        let mut item = ItemStack::new(ItemKind::new("stone"));
        item.meta_mut().set_data(
            DataKey::new("otherplugin", MARKER_KEY),
            DataValue::Text("Gem".into()),
        );
        assert!(registry.resolve(&item).is_none());
    }
}
