//! Custom item behaviors.
//!
//! A `CustomItem` is the polymorphic handler set for one kind of tagged
//! item. Implementors supply a stable marker string and a builder for the
//! item template; the registry stamps the marker into the template's
//! persistent data at registration time and keeps the frozen result.
//!
//! Every event hook has a default no-op body. Concrete behaviors override
//! only the hooks they care about; the dispatcher never needs to know which
//! kinds exist beyond their marker strings.

use crate::events::ItemEvent;
use crate::items::{ItemBuilder, ItemStack};

/// A derived artifact a behavior contributes at registration time.
///
/// Opaque to this crate: the registry forwards recipes to the host's
/// `RecipeSink` without interpreting them.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    /// Host-side identifier for the recipe.
    pub key: String,

    /// The item the recipe produces.
    pub result: ItemStack,
}

impl Recipe {
    /// Create a new recipe descriptor.
    pub fn new(key: impl Into<String>, result: ItemStack) -> Self {
        Self {
            key: key.into(),
            result,
        }
    }
}

/// Host collaborator that receives recipes at registration time.
pub trait RecipeSink {
    /// Accept one recipe contributed by a behavior.
    fn add_recipe(&mut self, recipe: Recipe);
}

/// A `RecipeSink` that accumulates recipes in memory.
///
/// Useful for hosts that batch-register and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecipeList {
    /// Collected recipes, in registration order.
    pub recipes: Vec<Recipe>,
}

impl RecipeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeSink for RecipeList {
    fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }
}

/// The behavior attached to one kind of tagged item.
///
/// ## Implementing
///
/// Two methods are required:
///
/// - `marker`: the stable identifier this behavior registers under. By
///   convention the implementing type's name ("MagicSword"). Must not be
///   blank; the registry rejects blank markers.
/// - `create_item_data`: a builder for the item template. The registry
///   stamps the marker into the built template, so implementors never write
///   the reserved key themselves.
///
/// `recipes` and all 30 event hooks default to doing nothing.
///
/// ## Example
///
/// ```
/// use itemforge::behavior::CustomItem;
/// use itemforge::events::ItemEvent;
/// use itemforge::items::{ItemBuilder, ItemKind};
///
/// struct MagicSword;
///
/// impl CustomItem for MagicSword {
///     fn marker(&self) -> &str {
///         "MagicSword"
///     }
///
///     fn create_item_data(&self) -> ItemBuilder {
///         ItemBuilder::new(ItemKind::new("iron_sword").with_max_durability(250))
///             .name("Magic Sword")
///     }
///
///     fn on_interact(&self, event: &mut ItemEvent) {
///         event.set_cancelled(true);
///     }
/// }
/// ```
pub trait CustomItem {
    /// Stable identifier this behavior registers under.
    fn marker(&self) -> &str;

    /// Builder for this behavior's item template.
    fn create_item_data(&self) -> ItemBuilder;

    /// Recipes to contribute at registration time.
    fn recipes(&self) -> Vec<Recipe> {
        Vec::new()
    }

    // Event hooks, one per `EventKind`. All default to no-ops.

    fn on_interact(&self, _event: &mut ItemEvent) {}
    fn on_consume(&self, _event: &mut ItemEvent) {}
    fn on_item_merge(&self, _event: &mut ItemEvent) {}
    fn on_item_spawn(&self, _event: &mut ItemEvent) {}
    fn on_item_despawn(&self, _event: &mut ItemEvent) {}
    fn on_item_craft(&self, _event: &mut ItemEvent) {}
    fn on_item_smith(&self, _event: &mut ItemEvent) {}
    fn on_block_drop_item(&self, _event: &mut ItemEvent) {}
    fn on_held_item_change(&self, _event: &mut ItemEvent) {}
    fn on_item_mend(&self, _event: &mut ItemEvent) {}
    fn on_enchant_item(&self, _event: &mut ItemEvent) {}
    fn on_entity_drop_item(&self, _event: &mut ItemEvent) {}
    fn on_player_drop_item(&self, _event: &mut ItemEvent) {}
    fn on_item_break(&self, _event: &mut ItemEvent) {}
    fn on_entity_pickup_item(&self, _event: &mut ItemEvent) {}
    fn on_item_damage(&self, _event: &mut ItemEvent) {}
    fn on_compost_item(&self, _event: &mut ItemEvent) {}
    fn on_prepare_craft(&self, _event: &mut ItemEvent) {}
    fn on_inventory_move_item(&self, _event: &mut ItemEvent) {}
    fn on_swap_hand_items(&self, _event: &mut ItemEvent) {}
    fn on_inventory_pickup_item(&self, _event: &mut ItemEvent) {}
    fn on_cartography_item(&self, _event: &mut ItemEvent) {}
    fn on_prepare_enchant(&self, _event: &mut ItemEvent) {}
    fn on_pick_block(&self, _event: &mut ItemEvent) {}
    fn on_attempt_pickup_item(&self, _event: &mut ItemEvent) {}
    fn on_entity_damage_item(&self, _event: &mut ItemEvent) {}
    fn on_entity_compost_item(&self, _event: &mut ItemEvent) {}
    fn on_item_cooldown(&self, _event: &mut ItemEvent) {}
    fn on_stop_using_item(&self, _event: &mut ItemEvent) {}
    fn on_item_frame_change(&self, _event: &mut ItemEvent) {}
}
