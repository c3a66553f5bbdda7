//! `catalogue-client`
//!
//! **Responsibility:** typed access to the remote building-catalogue service.
//!
//! This crate provides:
//! - One wire record per endpoint response, validated at decode time
//! - The [`CatalogueApi`] seam used by the insight services
//! - A `reqwest`-backed implementation, [`CatalogueClient`]

pub mod client;
pub mod error;
pub mod models;

pub use client::{CatalogueApi, CatalogueClient};
pub use error::ClientError;
pub use models::{
    CollectionEntry, PieceVariant, SetDetail, SetPart, SetPiece, SetSummary, UserDetail,
    UserSummary, requirements_from_pieces,
};
