use super::types::InvalidWord;
use once_cell::sync::Lazy;
use regex::Regex;

static ALPHABETIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alphabetic pattern"));

pub fn validate<'a>(raw: impl Into<Option<&'a str>>) -> Result<(), InvalidWord> {
    let raw = raw.into();
    let trimmed = match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(InvalidWord::new("Word cannot be null or empty", raw)),
    };

    if !ALPHABETIC.is_match(trimmed) {
        return Err(InvalidWord::new(
            format!("Word contains non-alphabetic characters: {}", trimmed),
            raw,
        ));
    }

    Ok(())
}

pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> Option<String> {
    raw.into().map(|w| w.trim().to_lowercase())
}
