// ABOUTME: User-facing notification texts emitted by the API modules
// ABOUTME: Shared with the session manager and front ends so wording stays consistent

pub const CONNECTION_FAILED: &str =
    "Unable to connect to the API server. Please ensure your backend is running and accessible.";
pub const MOCK_LOGIN: &str = "Using mock login as API appears inaccessible";
pub const DEMO_DATA: &str = "Using demo data as API appears inaccessible";
pub const DEMO_REGISTRATION: &str = "Registration simulated as API appears inaccessible";
pub const DEMO_SYSTEM: &str = "Database operations are unavailable while using demo data";
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SEARCH_FAILED: &str = "Search failed";
pub const PROFILE_FAILED: &str = "Failed to get seeker profile";

pub const DB_INIT_SUCCESS: &str = "Database initialized successfully";
pub const DB_INIT_FAILED: &str = "Failed to initialize database";
pub const DB_CONNECTION_SUCCESS: &str = "Database connection successful";
pub const DB_CONNECTION_FAILED: &str = "Failed to connect to database";
