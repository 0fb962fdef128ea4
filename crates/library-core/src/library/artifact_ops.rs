//! Artifact operations for the Library.

use log::info;

use super::{delete_from, Library};
use crate::{
    display::{Artifacts, ClassifiedArtifacts, DeleteResult, UpdateResult},
    error::{LibraryError, Result},
    filter::CategoryMask,
    models::{require_text, Artifact, ArtifactStatus, Choice, DeleteMode, Rarity},
    params::{DeleteRecord, RegisterArtifact, UpdateArtifact},
    stats::ArtifactStats,
    store::next_artifact_code,
};

impl Library {
    /// Registers an artifact, generating an `ART<n>` code when none is given.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Validation` for a blank description or an
    /// invalid rarity or status selection, and `LibraryError::Duplicate`
    /// when the supplied code is taken. The table is unchanged on error.
    pub fn register_artifact(&self, params: &RegisterArtifact) -> Result<Artifact> {
        let description = require_text("description", &params.description)?;
        let rarity = Rarity::from_selection(&params.rarity)?;
        let status = ArtifactStatus::from_selection(&params.status)?;

        let artifacts = self.artifacts.load()?;
        let code = match params.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => {
                if artifacts.iter().any(|artifact| artifact.code == code) {
                    return Err(LibraryError::duplicate("Artifact", code));
                }
                code.to_string()
            }
            _ => next_artifact_code(&artifacts),
        };

        let artifact = Artifact {
            code,
            description,
            rarity: rarity.as_str().to_string(),
            status: status.as_str().to_string(),
        };
        self.artifacts.append(&artifact)?;

        info!("Registered artifact {}", artifact.code);
        Ok(artifact)
    }

    /// Fails with `LibraryError::Duplicate` when `code` is already in use.
    ///
    /// Lets an interactive caller reject a taken code before prompting for
    /// the remaining fields.
    pub fn ensure_artifact_code_free(&self, code: &str) -> Result<()> {
        let code = code.trim();
        if self
            .artifacts
            .load()?
            .iter()
            .any(|artifact| artifact.code == code)
        {
            return Err(LibraryError::duplicate("Artifact", code));
        }
        Ok(())
    }

    /// Lists every artifact, destroyed ones included, in table order.
    pub fn list_artifacts(&self) -> Result<Vec<Artifact>> {
        self.artifacts.load()
    }

    /// Looks an artifact up by code (exact match).
    pub fn find_artifact(&self, code: &str) -> Result<Artifact> {
        let code = code.trim();
        self.artifacts
            .load()?
            .into_iter()
            .find(|artifact| artifact.code == code)
            .ok_or_else(|| LibraryError::not_found("Artifact", code))
    }

    /// Filters artifacts by a rarity rule such as `"1=1,3=1"`.
    ///
    /// The rule is parsed before the table is read; a malformed rule yields
    /// `LibraryError::InvalidRule` and no filtering at all.
    pub fn classify_artifacts(&self, rules: &str) -> Result<ClassifiedArtifacts> {
        let mask = CategoryMask::parse(rules, Rarity::OPTIONS)?;
        let artifacts = self.artifacts.load()?;
        let matching = mask
            .apply(&artifacts, |artifact| artifact.rarity.as_str())
            .into_iter()
            .cloned()
            .collect();

        Ok(ClassifiedArtifacts {
            mask,
            artifacts: Artifacts(matching),
        })
    }

    /// Rewrites the rarity and/or status of an artifact.
    pub fn reclassify_artifact(&self, params: &UpdateArtifact) -> Result<UpdateResult<Artifact>> {
        let rarity = params
            .rarity
            .as_deref()
            .map(Rarity::from_selection)
            .transpose()?;
        let status = params
            .status
            .as_deref()
            .map(ArtifactStatus::from_selection)
            .transpose()?;
        if rarity.is_none() && status.is_none() {
            return Err(LibraryError::validation("update")
                .with_reason("provide a new rarity, a new status, or both"));
        }

        let code = params.code.trim();
        let mut artifacts = self.artifacts.load()?;
        let artifact = artifacts
            .iter_mut()
            .find(|artifact| artifact.code == code)
            .ok_or_else(|| LibraryError::not_found("Artifact", code))?;

        let mut changes = Vec::new();
        if let Some(rarity) = rarity {
            changes.push(format!("Rarity: {} -> {}", artifact.rarity, rarity));
            artifact.rarity = rarity.as_str().to_string();
        }
        if let Some(status) = status {
            changes.push(format!("Status: {} -> {}", artifact.status, status));
            artifact.status = status.as_str().to_string();
        }
        let updated = artifact.clone();

        self.artifacts.save(&artifacts)?;
        info!("Reclassified artifact {}", updated.code);
        Ok(UpdateResult::with_changes(updated, changes))
    }

    /// Deletes an artifact: a hard delete removes the row, a soft delete sets
    /// the status to `Destroyed` and keeps the row.
    pub fn delete_artifact(&self, params: &DeleteRecord) -> Result<DeleteResult<Artifact>> {
        let mode = DeleteMode::from_selection(&params.mode)?;
        let artifact = delete_from(&self.artifacts, params.key.trim(), mode, |artifact| {
            artifact.status = ArtifactStatus::Destroyed.as_str().to_string();
        })?;

        info!("Deleted artifact {} ({:?})", artifact.code, mode);
        Ok(DeleteResult::new(artifact, mode))
    }

    /// Aggregates statistics over the current artifacts table.
    pub fn artifact_statistics(&self) -> Result<ArtifactStats> {
        Ok(ArtifactStats::aggregate(&self.artifacts.load()?))
    }
}
