use std::time::Duration;

pub const MYMEMORY_API: &str = "https://api.mymemory.translated.net/get";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const KEEPALIVE: Duration = Duration::from_secs(60);
