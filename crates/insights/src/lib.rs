//! Insight operations: which sets a user can build, what they lack, and who
//! could help.

pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    BuildSizeRecommendation, BuildableSet, BuildableSetsReport, CollaborationReport,
    ColorFlexibilityReport, ColorFlexibleSet, MissingPiecesReport, UsersReport,
};
pub use error::{InsightsError, InsightsResult};
pub use service::{DEFAULT_PERCENTILE, InsightsService};
