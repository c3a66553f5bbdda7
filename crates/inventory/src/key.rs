//! Piece keys: the (design, colour) pair every table is indexed by.
//!
//! Inventory and requirement tables only agree on a key when both sides were
//! normalized the same way, so colours are always funnelled through
//! [`ColorId::normalize`] regardless of how the service encoded them.

use serde::{Deserialize, Serialize};

use catalogue_core::RawId;

/// Colour / material variant of a piece, in its canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ColorId(String);

impl ColorId {
    /// The single normalization applied to every colour and material value.
    ///
    /// `1` and `"1"` both become `"1"`.
    pub fn normalize(raw: RawId) -> Self {
        Self(String::from(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for ColorId {
    fn from(value: RawId) -> Self {
        Self::normalize(value)
    }
}

impl From<ColorId> for String {
    fn from(value: ColorId) -> Self {
        value.0
    }
}

impl From<&str> for ColorId {
    fn from(value: &str) -> Self {
        Self::normalize(RawId::Text(value.to_string()))
    }
}

impl From<i64> for ColorId {
    fn from(value: i64) -> Self {
        Self::normalize(RawId::Number(value))
    }
}

impl core::fmt::Display for ColorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of an inventory or requirement entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceKey {
    pub design_id: String,
    pub color: ColorId,
}

impl PieceKey {
    pub fn new(design_id: impl Into<String>, color: impl Into<ColorId>) -> Self {
        Self {
            design_id: design_id.into(),
            color: color.into(),
        }
    }
}
