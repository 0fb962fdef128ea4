//! Visitor operations for the Library.

use log::info;

use super::{delete_from, Library};
use crate::{
    display::{DeleteResult, UpdateResult},
    error::{LibraryError, Result},
    models::{require_text, Choice, DeleteMode, Species, Visitor, VisitorStatus},
    params::{DeleteRecord, RegisterVisitor, ToggleVisitorStatus},
    stats::VisitorStats,
    store::next_visitor_id,
};

impl Library {
    /// Registers a visitor under the next free numeric id.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Validation` for a blank name, an invalid
    /// species or status selection, or a blank free-form species.
    pub fn register_visitor(&self, params: &RegisterVisitor) -> Result<Visitor> {
        let name = require_text("name", &params.name)?;
        let species = Species::from_selection(&params.species, params.other_species.as_deref())?;
        let status = VisitorStatus::from_selection(&params.status)?;

        let visitors = self.visitors.load()?;
        let visitor = Visitor {
            id: next_visitor_id(&visitors),
            name,
            species: species.as_str().to_string(),
            status: status.as_str().to_string(),
        };
        self.visitors.append(&visitor)?;

        info!("Registered visitor {} ({})", visitor.id, visitor.name);
        Ok(visitor)
    }

    /// Lists every visitor, soft-deleted ones included, in table order.
    pub fn list_visitors(&self) -> Result<Vec<Visitor>> {
        self.visitors.load()
    }

    /// Looks a visitor up by id (exact match).
    pub fn find_visitor(&self, id: &str) -> Result<Visitor> {
        let id = id.trim();
        self.visitors
            .load()?
            .into_iter()
            .find(|visitor| visitor.id == id)
            .ok_or_else(|| LibraryError::not_found("Visitor", id))
    }

    /// Flips an active visitor to retired and a retired one to active.
    ///
    /// Any other current status (including `deleted`) has no natural
    /// counterpart, so the caller must supply `fallback`, which may only be
    /// active or retired.
    pub fn toggle_visitor_status(
        &self,
        params: &ToggleVisitorStatus,
    ) -> Result<UpdateResult<Visitor>> {
        let id = params.id.trim();
        let mut visitors = self.visitors.load()?;
        let visitor = visitors
            .iter_mut()
            .find(|visitor| visitor.id == id)
            .ok_or_else(|| LibraryError::not_found("Visitor", id))?;

        let next = match visitor.status_kind().and_then(VisitorStatus::toggled) {
            Some(next) => next,
            None => match params.fallback.as_deref() {
                Some(selection) => VisitorStatus::from_selection(selection)?,
                None => {
                    return Err(LibraryError::validation("status").with_reason(format!(
                        "current status '{}' is neither active nor retired; choose {}",
                        visitor.status,
                        VisitorStatus::menu_labels()
                    )))
                }
            },
        };

        let change = format!("Status: {} -> {}", visitor.status, next);
        visitor.status = next.as_str().to_string();
        let updated = visitor.clone();

        self.visitors.save(&visitors)?;
        info!("Visitor {} {}", updated.id, change);
        Ok(UpdateResult::with_changes(updated, vec![change]))
    }

    /// Deletes a visitor: a hard delete removes the row, a soft delete sets
    /// the status to `deleted` and keeps the row.
    pub fn delete_visitor(&self, params: &DeleteRecord) -> Result<DeleteResult<Visitor>> {
        let mode = DeleteMode::from_selection(&params.mode)?;
        let visitor = delete_from(&self.visitors, params.key.trim(), mode, |visitor| {
            visitor.status = VisitorStatus::Deleted.as_str().to_string();
        })?;

        info!("Deleted visitor {} ({:?})", visitor.id, mode);
        Ok(DeleteResult::new(visitor, mode))
    }

    /// Aggregates statistics over the current visitors table.
    pub fn visitor_statistics(&self) -> Result<VisitorStats> {
        Ok(VisitorStats::aggregate(&self.visitors.load()?))
    }
}
