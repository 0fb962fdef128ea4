//! Statistics over loaded visitor and artifact tables.
//!
//! Both aggregations are a single pass over the records and only count; the
//! results are ready to print (see [`crate::display`]) or serialize.
//!
//! The two record kinds deliberately differ in how they treat their terminal
//! status: soft-deleted visitors are left out of the total and the species
//! breakdown, while destroyed artifacts still count everywhere.

use std::collections::BTreeSet;

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::models::{Artifact, Visitor};

/// Key used for artifacts with a blank rarity or status.
pub const UNKNOWN_ARTIFACT_KEY: &str = "Unknown";
/// Key used for visitors with a blank species.
pub const UNKNOWN_SPECIES_KEY: &str = "unknown";

/// Counts per key, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    /// Increments the count for `key`, appending it when first seen.
    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    /// Count for `key`, zero when never seen.
    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Aggregate figures for the artifacts table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactStats {
    /// Every row, destroyed artifacts included
    pub total: usize,
    /// Rows per rarity value
    pub rarity_counts: Tally,
    /// Distinct rarity values seen
    pub rarities: BTreeSet<String>,
    /// Rows per status value
    pub status_counts: Tally,
}

impl ArtifactStats {
    pub fn aggregate(artifacts: &[Artifact]) -> Self {
        let mut stats = Self {
            total: artifacts.len(),
            ..Self::default()
        };

        for artifact in artifacts {
            let rarity = or_unknown(artifact.rarity.trim(), UNKNOWN_ARTIFACT_KEY);
            let status = or_unknown(artifact.status.trim(), UNKNOWN_ARTIFACT_KEY);

            stats.rarities.insert(rarity.to_string());
            stats.rarity_counts.add(rarity);
            stats.status_counts.add(status);
        }

        stats
    }
}

/// Visitor status buckets; every visitor lands in exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitorStatusCounts {
    pub active: usize,
    pub retired: usize,
    pub deleted: usize,
    pub other: usize,
}

/// Aggregate figures for the visitors table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitorStats {
    /// Visitors that are not soft-deleted
    pub total: usize,
    /// Non-deleted visitors per species
    pub species_counts: Tally,
    /// Distinct species among non-deleted visitors
    pub species: BTreeSet<String>,
    pub status_counts: VisitorStatusCounts,
}

impl VisitorStats {
    /// Statuses and species compare case-insensitively; anything other than
    /// active, retired or deleted is counted as "other".
    pub fn aggregate(visitors: &[Visitor]) -> Self {
        let mut stats = Self::default();

        for visitor in visitors {
            let status = visitor.status.trim().to_lowercase();
            if status == "deleted" {
                stats.status_counts.deleted += 1;
                continue;
            }

            stats.total += 1;

            let species = visitor.species.trim().to_lowercase();
            let species = or_unknown(&species, UNKNOWN_SPECIES_KEY);
            stats.species.insert(species.to_string());
            stats.species_counts.add(species);

            match status.as_str() {
                "active" => stats.status_counts.active += 1,
                "retired" => stats.status_counts.retired += 1,
                _ => stats.status_counts.other += 1,
            }
        }

        stats
    }
}

fn or_unknown<'a>(value: &'a str, unknown: &'a str) -> &'a str {
    if value.is_empty() {
        unknown
    } else {
        value
    }
}
