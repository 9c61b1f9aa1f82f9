// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Freelink

// API Configuration
pub const FREELINK_API_URL: &str = "FREELINK_API_URL";

// Data source selection (remote, fallback, auto)
pub const FREELINK_DATA_SOURCE: &str = "FREELINK_DATA_SOURCE";

// Host the client is served from; feeds the `auto` data source heuristic
pub const FREELINK_CLIENT_HOST: &str = "FREELINK_CLIENT_HOST";

// Session storage directory
pub const FREELINK_HOME: &str = "FREELINK_HOME";
