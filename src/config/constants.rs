//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Form notifications
// =============================================================================

/// Shown when a login form passes validation
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! (Demo)";

/// Shown when a registration form passes validation
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! (Demo)";

/// Shown when any required form field is empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Shown when password and confirmation differ
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Shown when strict email validation rejects an address
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Validator error code attached to empty required fields
pub const REQUIRED_FIELD_CODE: &str = "required";

/// Accepted email shape when strict validation is enabled
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

// =============================================================================
// Pagination
// =============================================================================

/// Default number of job listings per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed listings per page
pub const MAX_PAGE_SIZE: u64 = 50;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Job listings
// =============================================================================

/// Display format for publication dates
pub const PUBLICATION_DATE_FORMAT: &str = "%d %b %Y";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "mysql://root:@localhost:3306/job_bridge";
