//! Shared constants: documentation tags, well-known paths, configuration keys.

/// Tag grouping transaction tracking endpoints in the API documentation.
pub const TRANSACTIONS_TAG: &str = "transactions";

/// Tag grouping summation/analysis endpoints in the API documentation.
pub const SUMMATION_TAG: &str = "summation";

/// Tag for service-level endpoints (health and the like).
pub const SYSTEM_TAG: &str = "system";

/// Path serving the interactive documentation browser.
pub const API_DOCS_PATH: &str = "/api";

/// Path serving the raw machine-readable documentation artifact.
pub const API_SPEC_PATH: &str = "/api-json";

/// Environment variable carrying the listen port override.
pub const PORT_ENV: &str = "PORT";

/// Listen port used when no override is supplied.
pub const DEFAULT_PORT: u16 = 3000;
