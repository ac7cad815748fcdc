use super::config::{FOREIGN_DIACRITICS, MAX_CANDIDATE_LEN, MIN_CANDIDATE_LEN};

/// Cheap check that a remote answer looks like a single English word.
pub fn looks_english(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(MIN_CANDIDATE_LEN..=MAX_CANDIDATE_LEN).contains(&len) {
        return false;
    }

    if !candidate.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return false;
    }

    !candidate.chars().any(|ch| FOREIGN_DIACRITICS.contains(&ch))
}
