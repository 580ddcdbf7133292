/// Configuration constants for the KUMA Core REST API
pub mod api {
    /// Base path for KUMA API v3
    pub const BASE_PATH: &str = "/api/v3";

    /// Number of records the server returns per full page.
    /// A shorter page marks the end of a collection.
    pub const PAGE_LIMIT: usize = 250;

    /// Timestamp layout expected by the `from`/`to` filters
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

    /// Endpoints, relative to the base path
    pub const WHOAMI: &str = "/users/whoami";
    pub const SERVICES: &str = "/services";
    pub const RESOURCES: &str = "/resources";
    pub const ALERTS: &str = "/alerts";
    pub const INCIDENTS: &str = "/incidents";
    pub const TENANTS: &str = "/tenants";
    pub const BACKUP: &str = "/system/backup";
    pub const RESTORE: &str = "/system/restore";
    pub const ASSETS_IMPORT: &str = "/assets/import";
}

/// Environment variables consulted for connection parameters
pub mod env {
    pub const ADDRESS: &str = "KUMA_ADDRESS";
    pub const PORT: &str = "KUMA_PORT";
    pub const TOKEN: &str = "KUMA_TOKEN";
    /// Full base URL override (plain-HTTP proxies, mock servers)
    pub const BASE_URL: &str = "KUMA_BASE_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default KUMA Core API port
    pub const PORT: &str = "7223";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Request timeout in seconds. Backups can take several minutes.
    pub const TIMEOUT_SECS: u64 = 600;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
