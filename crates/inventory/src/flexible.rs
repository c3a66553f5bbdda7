//! Colour-flexible matching.
//!
//! A set that cannot be built exactly may still be buildable if colours are
//! swapped within a design. Each required colour group of a design is served
//! wholesale by one owned colour of the same design; several groups may draw
//! on the same owned colour while its stock lasts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::ColorId;
use crate::table::{Inventory, Requirements};

/// How one required colour group of a design is satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorUsage {
    pub design_id: String,
    pub required_color: ColorId,
    pub used_color: ColorId,
    pub quantity: u64,
}

impl ColorUsage {
    pub fn is_substitution(&self) -> bool {
        self.required_color != self.used_color
    }
}

/// A complete colour assignment for one set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    pub usages: Vec<ColorUsage>,
}

impl ColorAssignment {
    pub fn has_substitution(&self) -> bool {
        self.usages.iter().any(ColorUsage::is_substitution)
    }
}

/// Find a colour assignment covering `requirements`, or `None` if no design can
/// be satisfied even with substitutions.
///
/// Candidates are tried exact colour first, then in ascending colour order, so a
/// set that is buildable as listed always comes back with no substitutions.
pub fn assign_colors(inventory: &Inventory, requirements: &Requirements) -> Option<ColorAssignment> {
    let owned = inventory.by_design();
    let mut usages = Vec::new();

    for (design_id, required) in requirements.by_design() {
        let mut available: BTreeMap<&ColorId, u64> = owned.get(design_id)?.clone();
        let groups: Vec<(&ColorId, u64)> = required.into_iter().collect();
        let mut chosen: Vec<&ColorId> = Vec::with_capacity(groups.len());

        if !assign_design(&groups, &mut available, &mut chosen) {
            return None;
        }

        usages.extend(groups.iter().zip(chosen).map(|((color, quantity), used)| ColorUsage {
            design_id: design_id.to_string(),
            required_color: (*color).clone(),
            used_color: used.clone(),
            quantity: *quantity,
        }));
    }

    Some(ColorAssignment { usages })
}

fn assign_design<'a>(
    groups: &[(&'a ColorId, u64)],
    available: &mut BTreeMap<&'a ColorId, u64>,
    chosen: &mut Vec<&'a ColorId>,
) -> bool {
    let Some(&(required_color, quantity)) = groups.get(chosen.len()) else {
        return true;
    };

    let candidates: Vec<&'a ColorId> = available
        .get_key_value(required_color)
        .map(|(k, _)| *k)
        .into_iter()
        .chain(available.keys().copied().filter(|c| *c != required_color))
        .collect();

    for candidate in candidates {
        let stock = available[candidate];
        if stock < quantity {
            continue;
        }

        available.insert(candidate, stock - quantity);
        chosen.push(candidate);

        if assign_design(groups, available, chosen) {
            return true;
        }

        chosen.pop();
        available.insert(candidate, stock);
    }

    false
}
