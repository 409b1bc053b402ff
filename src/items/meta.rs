//! Item metadata - the descriptive attribute snapshot on an item.
//!
//! `ItemMeta` collects everything the comparator inspects: display name,
//! lore lines, enchantment levels, display flags, attribute modifiers,
//! an optional custom model tag, and the persistent key/value store that
//! carries the behavior marker.
//!
//! ## DataValue Types
//!
//! Persistent entries are typed:
//!
//! - `Int`: numbers (charges, uses remaining)
//! - `Bool`: flags (soulbound)
//! - `Text`: strings (the behavior marker, owner names)
//! - `IntList` / `TextList`: list variants of the above

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// An enchantment the item can carry at some level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enchantment {
    Sharpness,
    Protection,
    Efficiency,
    Unbreaking,
    Fortune,
    Looting,
    Mending,
    Infinity,
    Knockback,
    FireAspect,
    SilkTouch,
    Thorns,
}

/// Display flags hiding parts of an item's tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HideAdditional,
    HideDye,
}

/// The attribute a modifier applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    AttackDamage,
    AttackSpeed,
    Armor,
    ArmorToughness,
    MaxHealth,
    MovementSpeed,
    KnockbackResistance,
    Luck,
}

/// How a modifier combines with the base attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierOperation {
    Add,
    MultiplyBase,
    MultiplyTotal,
}

/// A single attribute modifier.
///
/// Two modifiers are the same entry when name, amount, and operation all
/// match; the comparator uses exact entry matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    pub name: String,
    pub amount: f64,
    pub operation: ModifierOperation,
}

impl AttributeModifier {
    /// Create a new modifier.
    pub fn new(name: impl Into<String>, amount: f64, operation: ModifierOperation) -> Self {
        Self {
            name: name.into(),
            amount,
            operation,
        }
    }
}

/// Namespaced key into an item's persistent data store.
///
/// The namespace scopes keys to one plugin instance so two plugins writing
/// `custom_item` never collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataKey {
    pub namespace: String,
    pub key: String,
}

impl DataKey {
    /// Create a new namespaced key.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for DataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// Typed value in an item's persistent data store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value (behavior markers live here).
    Text(String),
    /// List of integers.
    IntList(Vec<i64>),
    /// List of strings.
    TextList(Vec<String>),
}

impl DataValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as int list reference if this is an IntList value.
    #[must_use]
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            DataValue::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            DataValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(v as i64)
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

/// The descriptive attribute snapshot attached to an item.
///
/// All fields are optional in the sense that their empty state means
/// "nothing declared"; the comparator's vacuous-pass rules key off that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Display name shown to players.
    pub display_name: Option<String>,

    /// Lore lines, in display order. Order is significant for comparison.
    pub lore: Vec<String>,

    /// Enchantment levels.
    pub enchantments: FxHashMap<Enchantment, u32>,

    /// Display flags.
    pub flags: FxHashSet<ItemFlag>,

    /// Attribute modifiers, multi-valued per attribute.
    pub attribute_modifiers: FxHashMap<AttributeKind, Vec<AttributeModifier>>,

    /// Custom model tag.
    pub custom_model_data: Option<i32>,

    /// Persistent key/value store. The behavior marker lives here under the
    /// registry's reserved key.
    pub persistent_data: FxHashMap<DataKey, DataValue>,
}

impl ItemMeta {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a display name is declared.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    /// Whether any lore lines are declared.
    #[must_use]
    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    /// Declared level of an enchantment, if present.
    #[must_use]
    pub fn enchant_level(&self, enchantment: Enchantment) -> Option<u32> {
        self.enchantments.get(&enchantment).copied()
    }

    /// Whether a display flag is present.
    #[must_use]
    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Whether a custom model tag is declared.
    #[must_use]
    pub fn has_custom_model_data(&self) -> bool {
        self.custom_model_data.is_some()
    }

    /// Whether the modifier multimap contains the exact entry.
    #[must_use]
    pub fn has_modifier_entry(&self, kind: AttributeKind, modifier: &AttributeModifier) -> bool {
        self.attribute_modifiers
            .get(&kind)
            .is_some_and(|mods| mods.contains(modifier))
    }

    /// Add a modifier entry to the multimap.
    pub fn add_modifier(&mut self, kind: AttributeKind, modifier: AttributeModifier) {
        self.attribute_modifiers.entry(kind).or_default().push(modifier);
    }

    /// Read a persistent entry.
    #[must_use]
    pub fn data(&self, key: &DataKey) -> Option<&DataValue> {
        self.persistent_data.get(key)
    }

    /// Write a persistent entry, replacing any previous value.
    pub fn set_data(&mut self, key: DataKey, value: DataValue) {
        self.persistent_data.insert(key, value);
    }

    /// Whether a persistent key exists.
    #[must_use]
    pub fn has_data(&self, key: &DataKey) -> bool {
        self.persistent_data.contains_key(key)
    }
}
