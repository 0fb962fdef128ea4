//! Display implementations for statistics.

use std::{collections::BTreeSet, fmt};

use crate::stats::{ArtifactStats, Tally, VisitorStats};

fn fmt_tally(f: &mut fmt::Formatter<'_>, tally: &Tally) -> fmt::Result {
    if tally.is_empty() {
        return writeln!(f, "- none");
    }
    for (key, count) in tally.iter() {
        writeln!(f, "- {key}: {count}")?;
    }
    Ok(())
}

fn fmt_set(f: &mut fmt::Formatter<'_>, set: &BTreeSet<String>) -> fmt::Result {
    if set.is_empty() {
        writeln!(f, "none")
    } else {
        let values: Vec<&str> = set.iter().map(String::as_str).collect();
        writeln!(f, "{}", values.join(", "))
    }
}

impl fmt::Display for VisitorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Visitor Statistics")?;
        writeln!(f)?;
        writeln!(f, "- **Total visitors (excluding deleted)**: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "## By species")?;
        writeln!(f)?;
        fmt_tally(f, &self.species_counts)?;
        writeln!(f)?;
        writeln!(f, "## Species seen")?;
        writeln!(f)?;
        fmt_set(f, &self.species)?;
        writeln!(f)?;
        writeln!(f, "## By status")?;
        writeln!(f)?;
        writeln!(f, "- Active: {}", self.status_counts.active)?;
        writeln!(f, "- Retired: {}", self.status_counts.retired)?;
        writeln!(f, "- Deleted: {}", self.status_counts.deleted)?;
        writeln!(f, "- Other: {}", self.status_counts.other)
    }
}

impl fmt::Display for ArtifactStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Artifact Statistics")?;
        writeln!(f)?;
        writeln!(f, "- **Total artifacts**: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "## By rarity")?;
        writeln!(f)?;
        fmt_tally(f, &self.rarity_counts)?;
        writeln!(f)?;
        writeln!(f, "## Rarities seen")?;
        writeln!(f)?;
        fmt_set(f, &self.rarities)?;
        writeln!(f)?;
        writeln!(f, "## By status")?;
        writeln!(f)?;
        fmt_tally(f, &self.status_counts)
    }
}
