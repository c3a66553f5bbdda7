//! Typed wire records, one per catalogue endpoint.
//!
//! Decoding is strict for the fields the buildability check reads (ids in
//! listings, part keys, quantities): a missing or mistyped one fails the whole
//! response. Descriptive fields default, and list-valued fields default to empty.

use serde::{Deserialize, Serialize};

use catalogue_core::{SetId, UserId};
use catalogue_inventory::{ColorId, Inventory, PieceKey, Requirements};

/// `GET /api/users`
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "Users", alias = "users", default)]
    pub users: Vec<UserSummary>,
}

/// `GET /api/user/by-username/{username}` and entries of `/api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub brick_count: u64,
}

/// `GET /api/user/by-id/{id}`
///
/// Only `collection` is read for buildability; the rest is informational.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub brick_count: Option<u64>,
    #[serde(default)]
    pub collection: Vec<CollectionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub piece_id: String,
    #[serde(default)]
    pub variants: Vec<PieceVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PieceVariant {
    pub color: ColorId,
    pub count: u64,
}

impl UserDetail {
    /// Flatten the nested collection into an owned-quantity table.
    pub fn inventory(&self) -> Inventory {
        self.collection
            .iter()
            .flat_map(|entry| {
                entry
                    .variants
                    .iter()
                    .map(|v| (PieceKey::new(entry.piece_id.clone(), v.color.clone()), v.count))
            })
            .collect()
    }
}

/// `GET /api/sets`
#[derive(Debug, Clone, Deserialize)]
pub struct SetsResponse {
    #[serde(rename = "Sets", alias = "sets", default)]
    pub sets: Vec<SetSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSummary {
    pub id: SetId,
    pub name: String,
    #[serde(default)]
    pub set_number: Option<String>,
    #[serde(default)]
    pub total_pieces: Option<u64>,
}

/// `GET /api/set/by-id/{id}` and `GET /api/set/by-name/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct SetDetail {
    #[serde(default)]
    pub id: Option<SetId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pieces: Vec<SetPiece>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetPiece {
    pub part: SetPart,
    pub quantity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPart {
    #[serde(rename = "designID")]
    pub design_id: String,
    pub material: ColorId,
    #[serde(default)]
    pub part_type: Option<String>,
}

impl SetDetail {
    pub fn requirements(&self) -> Requirements {
        requirements_from_pieces(&self.pieces)
    }
}

/// Sum required quantities per (design, material) key.
pub fn requirements_from_pieces(pieces: &[SetPiece]) -> Requirements {
    pieces
        .iter()
        .map(|p| (PieceKey::new(p.part.design_id.clone(), p.part.material.clone()), p.quantity))
        .collect()
}
