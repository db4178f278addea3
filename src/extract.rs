// Data extraction: raw source-container entries -> immutable skill sequence.
// The source container stays in the DOM (hidden) for reuse by later rebuilds;
// this step is read-only and never fails. Absence degrades to empty.

use crate::types::{RawSkillEntry, SkillRecord, SkillSequence};

/// Normalize raw source entries into an ordered, immutable skill sequence.
///
/// Order mirrors the source document order. Missing icon markup becomes an
/// empty fragment and missing names become empty strings, matching how the
/// page renders a partially filled entry rather than dropping it.
pub fn extract(entries: &[RawSkillEntry]) -> SkillSequence {
    entries
        .iter()
        .map(|entry| SkillRecord {
            icon_html: entry.icon_html.clone().unwrap_or_default(),
            name: entry
                .name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
