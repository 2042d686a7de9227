//! Case-insensitive ordered-subsequence scoring.
//!
//! The scorer is in the VS Code family: every query character must appear
//! in the target in order (single forward cursor), and the match quality is
//! an integer built from adjacency, start position, word boundaries, gaps
//! and case exactness. A non-match is 0; callers treat only scores above
//! zero as matched, so a pathological match may legitimately go negative.

/// Matches starting before this index earn a head-start bonus.
const EARLY_START_WINDOW: usize = 20;
/// Gap penalties are summed and capped here.
const MAX_GAP_PENALTY: i32 = 15;

/// Score `query` against `target`. 0 means `query` is not a
/// case-insensitive subsequence of `target`.
pub fn fuzzy_score(query: &str, target: &str) -> i32 {
    if query.is_empty() || target.is_empty() {
        return 0;
    }

    // Match on lowercased forms; keep the original target for boundary and
    // case bonuses.
    let query_chars: Vec<char> = query.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let query_lower: Vec<char> = query_chars.iter().map(|&c| lower(c)).collect();
    let target_lower: Vec<char> = target_chars.iter().map(|&c| lower(c)).collect();

    let mut positions = Vec::with_capacity(query_lower.len());
    let mut cursor = 0;
    for &qc in &query_lower {
        let mut found = false;
        while cursor < target_lower.len() {
            if target_lower[cursor] == qc {
                positions.push(cursor);
                cursor += 1;
                found = true;
                break;
            }
            cursor += 1;
        }
        if !found {
            return 0;
        }
    }

    // Base: one point per matched character.
    let mut score = positions.len() as i32;

    let start = positions[0];
    if start < EARLY_START_WINDOW {
        score += (EARLY_START_WINDOW - start) as i32;
    }

    // Adjacency bonus; non-adjacent pairs accumulate a capped gap penalty.
    let mut gap_total = 0;
    for pair in positions.windows(2) {
        if pair[1] == pair[0] + 1 {
            score += 5;
        } else {
            gap_total += (pair[1] - pair[0] - 1) as i32;
        }
    }
    score -= gap_total.min(MAX_GAP_PENALTY);

    for (idx, &pos) in positions.iter().enumerate() {
        let prev = if pos > 0 {
            Some(target_chars[pos - 1])
        } else {
            None
        };
        let curr = target_chars[pos];
        if is_word_boundary(prev, curr) {
            score += if pos == 0 { 8 } else { 6 };
        }
        // Exact-case bonus compares the query character at the same ordinal
        // index against the matched target character. Kept as-is for
        // ranking compatibility.
        if idx < query_chars.len() && query_chars[idx] == curr {
            score += 1;
        }
    }

    score
}

/// Per-character lowercase mapping (no length-changing expansions).
fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A position is a word boundary at the string start, after a separator or
/// whitespace, or on a lower-to-upper camel-case transition.
fn is_word_boundary(prev: Option<char>, curr: char) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    if matches!(prev, '-' | '_' | '.' | '/') || prev.is_whitespace() {
        return true;
    }
    prev.is_lowercase() && curr.is_uppercase()
}
