use std::time::Duration;

pub const SUPPORTED_LANGUAGES: [&str; 10] =
    ["es", "de", "fr", "it", "pt", "nl", "ru", "zh", "ja", "ko"];
pub const TARGET_LANGUAGE: &str = "en";
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

pub const MIN_CANDIDATE_LEN: usize = 2;
pub const MAX_CANDIDATE_LEN: usize = 20;
pub const FOREIGN_DIACRITICS: [char; 9] = ['ñ', 'ç', 'ü', 'ä', 'ö', 'é', 'è', 'à', 'ì'];
