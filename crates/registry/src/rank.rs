//! Query ranking over the registry.

use std::cmp::Ordering;

use crate::entry::HostEntry;
use crate::fuzzy::fuzzy_score;

/// Order entries for presentation.
///
/// With an empty (post-trim) query this is the identity listing: pinned
/// entries first, most recently pinned on top, then case-insensitive
/// primary alias. With a query, entries are scored across their candidate
/// fields, non-matches are dropped, and the rest sort by score descending
/// with the identity listing as tie-break.
///
/// Pure function of its inputs; callers may invoke it concurrently on the
/// same registry snapshot.
pub fn rank(entries: &[HostEntry], query: &str) -> Vec<HostEntry> {
    let query = query.trim();
    if query.is_empty() {
        let mut out = entries.to_vec();
        out.sort_by(compare_default);
        return out;
    }

    let mut scored: Vec<(i32, &HostEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let score = entry_score(entry, query);
            (score > 0).then_some((score, entry))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| compare_default(a.1, b.1)));
    scored.into_iter().map(|(_, entry)| entry.clone()).collect()
}

/// Best fuzzy score of the query over an entry's searchable fields:
/// primary alias, host, user, space-joined aliases, space-joined tags.
fn entry_score(entry: &HostEntry, query: &str) -> i32 {
    let mut best = 0;
    let mut consider = |field: &str| {
        if !field.is_empty() {
            best = best.max(fuzzy_score(query, field));
        }
    };

    consider(&entry.primary_alias);
    consider(&entry.host);
    consider(&entry.user);
    if !entry.aliases.is_empty() {
        consider(&entry.aliases.join(" "));
    }
    if !entry.tags.is_empty() {
        consider(&entry.tags.join(" "));
    }
    best
}

/// The shared tie-break chain: pinned before unpinned, most recently
/// pinned first, then primary alias case-insensitively, then exactly.
fn compare_default(a: &HostEntry, b: &HostEntry) -> Ordering {
    match (a.pinned_at, b.pinned_at) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| {
        a.primary_alias
            .to_lowercase()
            .cmp(&b.primary_alias.to_lowercase())
    })
    .then_with(|| a.primary_alias.cmp(&b.primary_alias))
}
