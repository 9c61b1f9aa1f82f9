use std::env;
use std::path::PathBuf;

/// Default REST API base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Storage key holding the opaque bearer token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key holding the JSON-serialized user
pub const USER_KEY: &str = "user";

/// Name of the file backing the persisted session
pub const SESSION_FILE: &str = "session.json";

/// Get the path to the Freelink directory (~/.freelink)
pub fn freelink_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".freelink")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".freelink")
    }
}

/// Get the path to the session file (~/.freelink/session.json)
pub fn session_file() -> PathBuf {
    freelink_dir().join(SESSION_FILE)
}
