//! Report DTOs emitted by the insight operations.

use serde::Serialize;

use catalogue_client::{SetSummary, UserSummary};
use catalogue_core::SetId;
use catalogue_inventory::{ColorUsage, PieceCount};

/// A set that passed the buildability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildableSet {
    pub name: String,
    pub set_number: Option<String>,
    pub total_pieces: Option<u64>,
}

impl From<&SetSummary> for BuildableSet {
    fn from(set: &SetSummary) -> Self {
        Self {
            name: set.name.clone(),
            set_number: set.set_number.clone(),
            total_pieces: set.total_pieces,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildableSetsReport {
    pub username: String,
    pub buildable_sets: Vec<BuildableSet>,
    pub count: usize,
}

impl BuildableSetsReport {
    pub fn new(username: impl Into<String>, buildable_sets: Vec<BuildableSet>) -> Self {
        Self {
            username: username.into(),
            count: buildable_sets.len(),
            buildable_sets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingPiecesReport {
    pub username: String,
    pub set_id: SetId,
    pub set_name: Option<String>,
    pub buildable: bool,
    pub missing: Vec<PieceCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationReport {
    pub username: String,
    pub set_id: Option<SetId>,
    pub set_name: String,
    pub collaborator_groups: Vec<[String; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSizeRecommendation {
    pub username: String,
    pub max_pieces: u64,
    pub users_covered: usize,
    pub percentile: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFlexibleSet {
    pub set_id: SetId,
    pub name: String,
    pub set_number: Option<String>,
    pub total_pieces: Option<u64>,
    pub color_usages: Vec<ColorUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFlexibilityReport {
    pub username: String,
    pub flexible_sets: Vec<ColorFlexibleSet>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersReport {
    pub users: Vec<UserSummary>,
    pub count: usize,
}
