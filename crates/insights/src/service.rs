//! Insight operations over the catalogue.
//!
//! Every operation is sequential: each remote read is awaited before the next
//! one starts, and the first failure ends the operation.

use catalogue_client::{CatalogueApi, SetSummary, UserDetail};
use catalogue_core::{DomainError, DomainResult, SetId};
use catalogue_inventory::{Inventory, Requirements, assign_colors, is_buildable};

use crate::dto::{
    BuildSizeRecommendation, BuildableSet, BuildableSetsReport, CollaborationReport,
    ColorFlexibilityReport, ColorFlexibleSet, MissingPiecesReport, UsersReport,
};
use crate::error::InsightsResult;

/// Default percentile for build-size recommendations.
pub const DEFAULT_PERCENTILE: f64 = 0.5;

pub struct InsightsService<A> {
    api: A,
}

impl<A: CatalogueApi> InsightsService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolve `username` and fetch the full user record.
    pub async fn load_user(&self, username: &str) -> InsightsResult<UserDetail> {
        let username = require_non_blank("username", username)?;
        let summary = self.api.user_by_username(username).await?;
        tracing::debug!(username, user_id = %summary.id, "resolved user");
        Ok(self.api.user_by_id(&summary.id).await?)
    }

    /// Inventory loader: username -> aggregated owned-quantity table.
    pub async fn load_inventory(&self, username: &str) -> InsightsResult<Inventory> {
        let detail = self.load_user(username).await?;
        let inventory = detail.inventory();
        tracing::info!(
            username,
            distinct_pieces = inventory.len(),
            total_pieces = inventory.total_pieces(),
            "loaded inventory"
        );
        Ok(inventory)
    }

    async fn set_requirements(&self, set: &SetSummary) -> InsightsResult<Requirements> {
        let detail = self.api.set_by_id(&set.id).await?;
        let requirements = detail.requirements();
        tracing::debug!(set_id = %set.id, keys = requirements.len(), "fetched set pieces");
        Ok(requirements)
    }

    /// Sets the user can build from their own inventory, in catalogue order.
    pub async fn buildable_sets(&self, username: &str) -> InsightsResult<BuildableSetsReport> {
        let inventory = self.load_inventory(username).await?;
        let sets = self.api.list_sets().await?;
        tracing::info!(sets = sets.len(), "evaluating catalogue");

        let mut buildable = Vec::new();
        for set in &sets {
            let requirements = self.set_requirements(set).await?;
            if is_buildable(&inventory, &requirements) {
                buildable.push(BuildableSet::from(set));
            }
        }

        tracing::info!(username, buildable = buildable.len(), "buildable sets computed");
        Ok(BuildableSetsReport::new(username, buildable))
    }

    /// Pieces the user lacks for one set.
    pub async fn missing_pieces(
        &self,
        username: &str,
        set_id: &SetId,
    ) -> InsightsResult<MissingPiecesReport> {
        let inventory = self.load_inventory(username).await?;
        let set = self.api.set_by_id(set_id).await?;
        let missing = inventory.missing(&set.requirements());

        Ok(MissingPiecesReport {
            username: username.to_string(),
            set_id: set.id.unwrap_or_else(|| set_id.clone()),
            set_name: set.name,
            buildable: missing.is_empty(),
            missing: missing.to_counts(),
        })
    }

    /// Users whose inventory makes up what `username` lacks for `set_name`.
    pub async fn collaborators(
        &self,
        username: &str,
        set_name: &str,
    ) -> InsightsResult<CollaborationReport> {
        let set_name = require_non_blank("set name", set_name)?;
        let set = self.api.set_by_name(set_name).await?;
        let inventory = self.load_inventory(username).await?;
        let missing = inventory.missing(&set.requirements());

        let mut groups = Vec::new();
        if missing.is_empty() {
            tracing::info!(username, set = set_name, "no collaborators needed");
        } else {
            let users = self.api.list_users().await?;
            for candidate in users.iter().filter(|u| u.username != username) {
                let detail = self.api.user_by_id(&candidate.id).await?;
                if is_buildable(&detail.inventory(), &missing) {
                    groups.push([username.to_string(), candidate.username.clone()]);
                }
            }
            tracing::info!(username, set = set_name, groups = groups.len(), "collaborators found");
        }

        Ok(CollaborationReport {
            username: username.to_string(),
            set_id: set.id,
            set_name: set.name.unwrap_or_else(|| set_name.to_string()),
            collaborator_groups: groups,
        })
    }

    /// Largest custom build `username` can design so that the user at the given
    /// brick-count percentile could also build it.
    pub async fn build_size(
        &self,
        username: &str,
        percentile: f64,
    ) -> InsightsResult<BuildSizeRecommendation> {
        let username = require_non_blank("username", username)?;
        if !(percentile > 0.0 && percentile <= 1.0) {
            return Err(DomainError::validation(format!(
                "percentile must be within (0, 1], got {percentile}"
            ))
            .into());
        }

        let mut candidates: Vec<_> = self
            .api
            .list_users()
            .await?
            .into_iter()
            .filter(|u| u.username != username)
            .collect();
        if candidates.is_empty() {
            return Err(DomainError::not_found("no other users to compare against").into());
        }
        candidates.sort_by_key(|u| u.brick_count);

        let skip = ((candidates.len() as f64 * percentile).floor() as usize).min(candidates.len() - 1);
        let candidate = &candidates[skip];
        let candidate_inventory = self.api.user_by_id(&candidate.id).await?.inventory();

        let requester = self.load_user(username).await?;
        let requester_inventory = requester.inventory();
        let max_pieces = if is_buildable(&requester_inventory, &candidate_inventory) {
            candidate.brick_count
        } else {
            requester
                .brick_count
                .unwrap_or_else(|| requester_inventory.total_pieces())
        };

        tracing::info!(username, comparison = %candidate.username, max_pieces, "build size recommended");
        Ok(BuildSizeRecommendation {
            username: username.to_string(),
            max_pieces,
            users_covered: candidates.len() - skip,
            percentile,
        })
    }

    /// Sets buildable only when colours are substituted within a design.
    pub async fn color_flexibility(&self, username: &str) -> InsightsResult<ColorFlexibilityReport> {
        let inventory = self.load_inventory(username).await?;
        let sets = self.api.list_sets().await?;

        let mut flexible = Vec::new();
        for set in &sets {
            let requirements = self.set_requirements(set).await?;
            let Some(assignment) = assign_colors(&inventory, &requirements) else {
                continue;
            };
            if assignment.has_substitution() {
                flexible.push(ColorFlexibleSet {
                    set_id: set.id.clone(),
                    name: set.name.clone(),
                    set_number: set.set_number.clone(),
                    total_pieces: set.total_pieces,
                    color_usages: assignment.usages,
                });
            }
        }

        Ok(ColorFlexibilityReport {
            username: username.to_string(),
            count: flexible.len(),
            flexible_sets: flexible,
        })
    }

    pub async fn list_users(&self) -> InsightsResult<UsersReport> {
        let users = self.api.list_users().await?;
        Ok(UsersReport {
            count: users.len(),
            users,
        })
    }
}

fn require_non_blank<'a>(what: &str, value: &'a str) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        Err(DomainError::validation(format!("{what} cannot be empty")))
    } else {
        Ok(value)
    }
}
