//! Item events delivered by the host.
//!
//! The host owns the actual event loop; this module models the slice of each
//! event the dispatcher needs: which kind it is and which item stacks it
//! carries as subjects. Handlers receive the event mutably and may cancel it
//! or rewrite its subjects - the host decides what either means.
//!
//! ## Subject shapes
//!
//! Most kinds carry exactly one subject ("the item on the event"). Two are
//! special:
//!
//! - `SwapHandItems` carries a pair with distinct roles (main hand, off
//!   hand); each side resolves independently.
//! - `BlockDrop` carries many subjects; each resolves independently, in the
//!   order the host exposes them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::items::ItemStack;

/// The recognized host event kinds.
///
/// One dispatch rule exists per kind; kinds the host fires that are not in
/// this list never reach the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Player interacted while holding the item.
    Interact,
    /// Player consumed the item.
    Consume,
    /// Two dropped item entities merged.
    ItemMerge,
    /// An item entity spawned in the world.
    ItemSpawn,
    /// An item entity despawned.
    ItemDespawn,
    /// The item was produced by a crafting grid.
    Craft,
    /// The item was produced by a smithing table.
    Smith,
    /// A broken block dropped items (multi-subject).
    BlockDrop,
    /// Player changed the actively held item.
    HeldItemChange,
    /// The item was mended by collected experience.
    ItemMend,
    /// The item was enchanted.
    Enchant,
    /// A non-player entity dropped the item.
    EntityDropItem,
    /// A player dropped the item.
    PlayerDropItem,
    /// The item broke from durability loss.
    ItemBreak,
    /// An entity picked the item up.
    EntityPickupItem,
    /// The item took durability damage.
    ItemDamage,
    /// The item was fed to a composter block.
    Compost,
    /// A crafting grid previewed the item as its result.
    PrepareCraft,
    /// The item moved between inventories.
    InventoryMoveItem,
    /// Player swapped main-hand and off-hand items (pair-subject).
    SwapHandItems,
    /// A container inventory picked the item up.
    InventoryPickupItem,
    /// The item was produced by a cartography table.
    Cartography,
    /// An enchanting table previewed offers for the item.
    PrepareEnchant,
    /// Player pick-blocked with the item on the cursor.
    PickBlock,
    /// Player attempted to pick the item up.
    AttemptPickupItem,
    /// A non-player entity's item took durability damage.
    EntityDamageItem,
    /// A non-player entity fed the item to a composter.
    EntityCompost,
    /// The item went on use cooldown.
    ItemCooldown,
    /// Player stopped using the item.
    StopUsingItem,
    /// An item frame's item changed.
    ItemFrameChange,
}

/// How many subjects an event kind carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectArity {
    One,
    Pair,
    Many,
}

impl EventKind {
    /// The subject shape this kind carries.
    #[must_use]
    pub fn arity(self) -> SubjectArity {
        match self {
            EventKind::SwapHandItems => SubjectArity::Pair,
            EventKind::BlockDrop => SubjectArity::Many,
            _ => SubjectArity::One,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The item stacks an event carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Subjects {
    /// No subject (the host exposed none, e.g. an empty crafting result).
    None,
    /// A single subject.
    One(ItemStack),
    /// Two subjects with distinct roles.
    Pair {
        main_hand: ItemStack,
        off_hand: ItemStack,
    },
    /// Several subjects, in host order.
    Many(Vec<ItemStack>),
}

impl Subjects {
    /// Iterate subjects in host order (main hand before off hand).
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        let buf: SmallVec<[&ItemStack; 2]> = match self {
            Subjects::None => SmallVec::new(),
            Subjects::One(item) => std::iter::once(item).collect(),
            Subjects::Pair {
                main_hand,
                off_hand,
            } => [main_hand, off_hand].into_iter().collect(),
            Subjects::Many(items) => items.iter().collect(),
        };
        buf.into_iter()
    }

    /// Number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Subjects::None => 0,
            Subjects::One(_) => 1,
            Subjects::Pair { .. } => 2,
            Subjects::Many(items) => items.len(),
        }
    }

    /// Whether there are no subjects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One host event as seen by the dispatcher.
///
/// ## Example
///
/// ```
/// use itemforge::events::{EventKind, ItemEvent};
/// use itemforge::items::{ItemKind, ItemStack};
///
/// let held = ItemStack::new(ItemKind::new("iron_sword"));
/// let mut event = ItemEvent::single(EventKind::Interact, held);
///
/// assert!(!event.is_cancelled());
/// event.set_cancelled(true);
/// assert!(event.is_cancelled());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemEvent {
    /// What kind of event this is.
    pub kind: EventKind,

    /// The item stacks the event carries.
    pub subjects: Subjects,

    /// Cancellation flag, interpreted by the host.
    cancelled: bool,
}

impl ItemEvent {
    /// Create an event with no subject.
    pub fn bare(kind: EventKind) -> Self {
        Self {
            kind,
            subjects: Subjects::None,
            cancelled: false,
        }
    }

    /// Create a single-subject event.
    pub fn single(kind: EventKind, item: ItemStack) -> Self {
        debug_assert_eq!(kind.arity(), SubjectArity::One);
        Self {
            kind,
            subjects: Subjects::One(item),
            cancelled: false,
        }
    }

    /// Create a hand-swap event carrying both hands.
    pub fn hand_swap(main_hand: ItemStack, off_hand: ItemStack) -> Self {
        Self {
            kind: EventKind::SwapHandItems,
            subjects: Subjects::Pair {
                main_hand,
                off_hand,
            },
            cancelled: false,
        }
    }

    /// Create a block-drop event carrying the dropped stacks in host order.
    pub fn block_drop<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ItemStack>,
    {
        Self {
            kind: EventKind::BlockDrop,
            subjects: Subjects::Many(items.into_iter().collect()),
            cancelled: false,
        }
    }

    /// The first (or only) subject, if any.
    #[must_use]
    pub fn item(&self) -> Option<&ItemStack> {
        self.subjects.iter().next()
    }

    /// The main-hand subject of a pair event.
    #[must_use]
    pub fn main_hand(&self) -> Option<&ItemStack> {
        match &self.subjects {
            Subjects::Pair { main_hand, .. } => Some(main_hand),
            _ => None,
        }
    }

    /// The off-hand subject of a pair event.
    #[must_use]
    pub fn off_hand(&self) -> Option<&ItemStack> {
        match &self.subjects {
            Subjects::Pair { off_hand, .. } => Some(off_hand),
            _ => None,
        }
    }

    /// Whether the event is cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Set the cancellation flag. What cancellation means is up to the host.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
