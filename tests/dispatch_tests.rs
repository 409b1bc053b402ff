//! Registry and dispatch integration tests.
//!
//! These tests verify marker-based routing end to end: registration stamps
//! the marker, dispatch resolves it per subject, non-matches stay silent.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use itemforge::behavior::{CustomItem, Recipe, RecipeList};
use itemforge::events::{EventKind, ItemEvent};
use itemforge::items::{DataKey, DataValue, ItemBuilder, ItemKind, ItemStack};
use itemforge::registry::{CollisionPolicy, ItemRegistry, RegistryError};

/// A behavior that counts interact and swap invocations and cancels on
/// consumption, so tests can observe both routing and event mutation.
struct MagicSword {
    interacts: Rc<Cell<usize>>,
    swaps: Rc<Cell<usize>>,
}

impl MagicSword {
    fn new() -> (Self, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let interacts = Rc::new(Cell::new(0));
        let swaps = Rc::new(Cell::new(0));
        let behavior = Self {
            interacts: Rc::clone(&interacts),
            swaps: Rc::clone(&swaps),
        };
        (behavior, interacts, swaps)
    }
}

impl CustomItem for MagicSword {
    fn marker(&self) -> &str {
        "MagicSword"
    }

    fn create_item_data(&self) -> ItemBuilder {
        ItemBuilder::new(ItemKind::new("iron_sword").with_max_durability(250))
            .name("Magic Sword")
            .add_lore_line("Hums faintly.")
    }

    fn recipes(&self) -> Vec<Recipe> {
        vec![Recipe::new("magic_sword", self.create_item_data().result())]
    }

    fn on_interact(&self, _event: &mut ItemEvent) {
        self.interacts.set(self.interacts.get() + 1);
    }

    fn on_consume(&self, event: &mut ItemEvent) {
        event.set_cancelled(true);
    }

    fn on_swap_hand_items(&self, _event: &mut ItemEvent) {
        self.swaps.set(self.swaps.get() + 1);
    }
}

/// A second behavior that should never fire in MagicSword scenarios.
struct LuckyCharm {
    fired: Rc<Cell<usize>>,
}

impl CustomItem for LuckyCharm {
    fn marker(&self) -> &str {
        "LuckyCharm"
    }

    fn create_item_data(&self) -> ItemBuilder {
        ItemBuilder::new(ItemKind::new("rabbit_foot")).name("Lucky Charm")
    }

    fn on_interact(&self, _event: &mut ItemEvent) {
        self.fired.set(self.fired.get() + 1);
    }

    fn on_block_drop_item(&self, _event: &mut ItemEvent) {
        self.fired.set(self.fired.get() + 1);
    }
}

fn plain(kind: &str) -> ItemStack {
    ItemStack::new(ItemKind::new(kind))
}

/// Dispatching an interact event whose held item carries the marker invokes
/// exactly the matching behavior's interact hook, once.
#[test]
fn test_magic_sword_interact_fires_once() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();

    let (sword, interacts, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let charm_fired = Rc::new(Cell::new(0));
    registry
        .register(
            Box::new(LuckyCharm {
                fired: Rc::clone(&charm_fired),
            }),
            &mut recipes,
        )
        .unwrap();

    let held = registry.template("MagicSword").unwrap().clone();
    let mut event = ItemEvent::single(EventKind::Interact, held);

    assert_eq!(registry.dispatch(&mut event), 1);
    assert_eq!(interacts.get(), 1);
    assert_eq!(charm_fired.get(), 0, "no other behavior may fire");
}

/// An unmarked item produces no invocation and no panic.
#[test]
fn test_plain_item_is_ignored() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let (sword, interacts, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let mut event = ItemEvent::single(EventKind::Interact, plain("iron_sword"));
    assert_eq!(registry.dispatch(&mut event), 0);
    assert_eq!(interacts.get(), 0);
}

/// A marker with no registration resolves to no dispatch.
#[test]
fn test_unknown_marker_is_ignored() {
    let registry = ItemRegistry::new("testplugin");

    let mut item = plain("iron_sword");
    item.meta_mut().set_data(
        registry.data_key().clone(),
        DataValue::Text("NeverRegistered".into()),
    );

    let mut event = ItemEvent::single(EventKind::Interact, item);
    assert_eq!(registry.dispatch(&mut event), 0);
}

/// An event with no subject at all resolves to no dispatch.
#[test]
fn test_subjectless_event_is_ignored() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let (sword, _, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let mut event = ItemEvent::bare(EventKind::PrepareCraft);
    assert_eq!(registry.dispatch(&mut event), 0);
}

/// Events route to the hook matching their kind, not to every overridden
/// hook on the behavior.
#[test]
fn test_routing_respects_event_kind() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let (sword, interacts, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let held = registry.template("MagicSword").unwrap().clone();

    // Consume cancels (per MagicSword), interact counts; neither crosses over.
    let mut consume = ItemEvent::single(EventKind::Consume, held.clone());
    assert_eq!(registry.dispatch(&mut consume), 1);
    assert!(consume.is_cancelled());
    assert_eq!(interacts.get(), 0);

    // A kind the behavior does not override is a no-op but still a match.
    let mut mend = ItemEvent::single(EventKind::ItemMend, held);
    assert_eq!(registry.dispatch(&mut mend), 1);
    assert!(!mend.is_cancelled());
}

/// Hand-swap events resolve each side independently: 0, 1, or 2 calls.
#[test]
fn test_hand_swap_resolves_each_side() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let (sword, _, swaps) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let tagged = registry.template("MagicSword").unwrap().clone();

    let mut neither = ItemEvent::hand_swap(plain("sword"), plain("shield"));
    assert_eq!(registry.dispatch(&mut neither), 0);
    assert_eq!(swaps.get(), 0);

    let mut main_only = ItemEvent::hand_swap(tagged.clone(), plain("shield"));
    assert_eq!(registry.dispatch(&mut main_only), 1);
    assert_eq!(swaps.get(), 1);

    let mut off_only = ItemEvent::hand_swap(plain("sword"), tagged.clone());
    assert_eq!(registry.dispatch(&mut off_only), 1);
    assert_eq!(swaps.get(), 2);

    let mut both = ItemEvent::hand_swap(tagged.clone(), tagged);
    assert_eq!(registry.dispatch(&mut both), 2);
    assert_eq!(swaps.get(), 4);
}

/// Block-drop events invoke the hook once per matched subject in host
/// order, skipping unmatched drops without affecting their siblings.
#[test]
fn test_block_drop_skips_unmatched_subjects() {
    struct Tracer {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl CustomItem for Tracer {
        fn marker(&self) -> &str {
            self.tag
        }

        fn create_item_data(&self) -> ItemBuilder {
            ItemBuilder::new(ItemKind::new("stone"))
        }

        fn on_block_drop_item(&self, _event: &mut ItemEvent) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for tag in ["Coal", "Gem"] {
        registry
            .register(
                Box::new(Tracer {
                    tag,
                    log: Rc::clone(&log),
                }),
                &mut recipes,
            )
            .unwrap();
    }

    let coal = registry.template("Coal").unwrap().clone();
    let gem = registry.template("Gem").unwrap().clone();
    let mut event = ItemEvent::block_drop([
        gem.clone(),
        plain("cobblestone"),
        coal,
        plain("flint"),
        gem,
    ]);

    assert_eq!(registry.dispatch(&mut event), 3);
    assert_eq!(*log.borrow(), vec!["Gem", "Coal", "Gem"]);
}

/// Recipes reach the sink at registration time, in registration order.
#[test]
fn test_recipes_forwarded_on_registration() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();

    let (sword, _, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    assert_eq!(recipes.recipes.len(), 1);
    assert_eq!(recipes.recipes[0].key, "magic_sword");
    assert_eq!(
        recipes.recipes[0].result.meta().display_name.as_deref(),
        Some("Magic Sword")
    );
}

/// An item built by hand and stamped with the marker dispatches the same as
/// the registry's own template.
#[test]
fn test_hand_built_item_with_marker_dispatches() {
    let mut registry = ItemRegistry::new("testplugin");
    let mut recipes = RecipeList::new();
    let (sword, interacts, _) = MagicSword::new();
    registry.register(Box::new(sword), &mut recipes).unwrap();

    let item = ItemBuilder::new(ItemKind::new("iron_sword").with_max_durability(250))
        .name("Magic Sword")
        .add_persistent_data(
            DataKey::new("testplugin", "custom_item"),
            DataValue::Text("MagicSword".into()),
        )
        .result();

    let mut event = ItemEvent::single(EventKind::Interact, item);
    assert_eq!(registry.dispatch(&mut event), 1);
    assert_eq!(interacts.get(), 1);
}

/// The reject policy refuses a second registration under the same marker;
/// the first registration stays intact and keeps dispatching.
#[test]
fn test_reject_policy_keeps_first_registration() {
    let mut registry =
        ItemRegistry::new("testplugin").with_collision_policy(CollisionPolicy::Reject);
    let mut recipes = RecipeList::new();

    let (first, interacts, _) = MagicSword::new();
    registry.register(Box::new(first), &mut recipes).unwrap();

    let (second, _, _) = MagicSword::new();
    let err = registry
        .register(Box::new(second), &mut recipes)
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateMarker("MagicSword".into()));

    let held = registry.template("MagicSword").unwrap().clone();
    let mut event = ItemEvent::single(EventKind::Interact, held);
    registry.dispatch(&mut event);
    assert_eq!(interacts.get(), 1);
}
