//! Structural metadata comparison.
//!
//! `contains_all_meta(a, b)` answers "is `a`'s metadata a superset of `b`'s?"
//! - every constraint `b` declares must be satisfied by `a`, and anything `b`
//! leaves undeclared passes vacuously. Each field has its own sub-predicate;
//! all of them are pure and combined with logical AND.
//!
//! ## The model-data dual check
//!
//! The top-level check AND's two model-data predicates together:
//! `contains_custom_model_data` (vacuous when `b` declares none) and
//! `equals_custom_model_data` (fails unless *both* sides declare one). The
//! strict check overrides the vacuous rule, so two snapshots without model
//! tags never satisfy `contains_all_meta` - even `contains_all_meta(a, a)`.
//! That behavior is preserved deliberately; callers that want the
//! subset-only rule pass `ModelDataRule::SubsetOnly` to
//! `contains_all_meta_with`.

use super::meta::ItemMeta;
use super::stack::ItemStack;

/// How the custom model tag participates in `contains_all_meta_with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModelDataRule {
    /// Both sides must declare a model tag and the tags must be equal.
    /// This is the historical behavior of `contains_all_meta`.
    #[default]
    RequireBoth,
    /// Vacuous when `b` declares no model tag; equal tags required otherwise.
    SubsetOnly,
}

/// Compare two stacks by their metadata snapshots.
#[must_use]
pub fn contains_all_meta_stacks(a: &ItemStack, b: &ItemStack) -> bool {
    contains_all_meta(a.meta(), b.meta())
}

/// True iff `a` is a structural superset of `b`.
///
/// Applies `ModelDataRule::RequireBoth` (see the module docs for why that
/// makes model tags mandatory on both sides).
#[must_use]
pub fn contains_all_meta(a: &ItemMeta, b: &ItemMeta) -> bool {
    contains_all_meta_with(a, b, ModelDataRule::RequireBoth)
}

/// True iff `a` is a structural superset of `b` under the given model rule.
#[must_use]
pub fn contains_all_meta_with(a: &ItemMeta, b: &ItemMeta, rule: ModelDataRule) -> bool {
    let display_name = compare_display_name(a, b);
    let lore = compare_lore(a, b);
    let enchantments = contains_all_enchantments(a, b);
    let flags = contains_all_flags(a, b);
    let attributes = contains_all_attributes(a, b);
    let model_data = contains_custom_model_data(a, b);
    let persistent = contains_persistent_keys(a, b);
    let model_rule = match rule {
        ModelDataRule::RequireBoth => equals_custom_model_data(a, b),
        ModelDataRule::SubsetOnly => true,
    };

    display_name
        && lore
        && enchantments
        && flags
        && attributes
        && model_data
        && persistent
        && model_rule
}

/// If `b` declares a display name, `a` must declare the same one.
#[must_use]
pub fn compare_display_name(a: &ItemMeta, b: &ItemMeta) -> bool {
    if b.has_display_name() {
        return a.display_name == b.display_name;
    }
    true
}

/// If `b` declares lore, `a`'s lore must match line for line, in order.
#[must_use]
pub fn compare_lore(a: &ItemMeta, b: &ItemMeta) -> bool {
    if b.has_lore() {
        return a.lore == b.lore;
    }
    true
}

/// Every enchantment in `b` must be present in `a` at an equal or higher
/// level. Enchantments absent from `b` are unconstrained.
#[must_use]
pub fn contains_all_enchantments(a: &ItemMeta, b: &ItemMeta) -> bool {
    for (enchantment, level_b) in &b.enchantments {
        match a.enchant_level(*enchantment) {
            Some(level_a) if level_a >= *level_b => {}
            _ => return false,
        }
    }
    true
}

/// Every flag in `b` must be present in `a`.
#[must_use]
pub fn contains_all_flags(a: &ItemMeta, b: &ItemMeta) -> bool {
    b.flags.iter().all(|flag| a.has_flag(*flag))
}

/// Every modifier entry in `b` must be present in `a`, with one quirk kept
/// from the original: an empty `b` passes even against an empty `a`, but an
/// empty `a` fails against a non-empty `b` - and a non-empty `a` against an
/// empty `b` passes without looking at entries.
#[must_use]
pub fn contains_all_attributes(a: &ItemMeta, b: &ItemMeta) -> bool {
    let a_empty = a.attribute_modifiers.is_empty();
    let b_empty = b.attribute_modifiers.is_empty();

    if a_empty && b_empty {
        return true;
    }
    if a_empty {
        return false;
    }
    if b_empty {
        return true;
    }

    for (kind, modifiers) in &b.attribute_modifiers {
        for modifier in modifiers {
            if !a.has_modifier_entry(*kind, modifier) {
                return false;
            }
        }
    }
    true
}

/// If `b` declares a model tag, `a` must declare an equal one.
#[must_use]
pub fn contains_custom_model_data(a: &ItemMeta, b: &ItemMeta) -> bool {
    if b.has_custom_model_data() {
        if !a.has_custom_model_data() {
            return false;
        }
        return a.custom_model_data == b.custom_model_data;
    }
    true
}

/// Strict model check: both sides must declare a model tag and the tags must
/// be equal. Fails when either side declares none.
#[must_use]
pub fn equals_custom_model_data(a: &ItemMeta, b: &ItemMeta) -> bool {
    match (a.custom_model_data, b.custom_model_data) {
        (Some(data_a), Some(data_b)) => data_a == data_b,
        _ => false,
    }
}

/// Every persistent key in `b` must exist in `a`. Values are not compared.
#[must_use]
pub fn contains_persistent_keys(a: &ItemMeta, b: &ItemMeta) -> bool {
    if b.persistent_data.is_empty() {
        return true;
    }
    b.persistent_data.keys().all(|key| a.has_data(key))
}
