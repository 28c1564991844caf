// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Ticklist

// Server Configuration
pub const TICKLIST_HOST: &str = "TICKLIST_HOST";
pub const TICKLIST_PORT: &str = "TICKLIST_PORT";
pub const PORT: &str = "PORT"; // Legacy

// CORS Configuration
pub const TICKLIST_CORS_ORIGIN: &str = "TICKLIST_CORS_ORIGIN";

// Database Configuration
pub const TICKLIST_DATABASE_PATH: &str = "TICKLIST_DATABASE_PATH";
pub const TICKLIST_SEED_DEMO_DATA: &str = "TICKLIST_SEED_DEMO_DATA";

// System Environment Variables
pub const HOME: &str = "HOME";

// Defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DATA_DIR_NAME: &str = ".ticklist";
pub const DATABASE_FILE_NAME: &str = "ticklist.db";
