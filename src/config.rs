use serde::Deserialize;

/// Configuration file read once at boot.
pub const CONFIG_FILE: &str = "etalase.toml";

/// Password accepted when no `admin.password_hash` is configured.
/// Boot warns loudly while this is active.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public base URL, used for absolute links in the RSS feed.
    pub site_url: String,
    pub backend: BackendConfig,
    pub admin: AdminConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            site_url: "http://localhost:8000".to_string(),
            backend: BackendConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the managed data service. The special value "memory"
    /// selects the in-process store (local development).
    pub url: String,
    pub api_key: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            url: "memory".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// URL segment the admin panel is mounted under.
    pub slug: String,
    /// bcrypt hash of the admin password; empty falls back to the default
    /// password, hashed at boot.
    pub password_hash: String,
    pub session_expiry_hours: i64,
    pub login_rate_limit: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        AdminConfig {
            slug: "admin".to_string(),
            password_hash: String::new(),
            session_expiry_hours: 24,
            login_rate_limit: 5,
        }
    }
}

impl AppConfig {
    pub fn uses_default_password(&self) -> bool {
        self.admin.password_hash.is_empty()
    }
}

/// Read `etalase.toml` from the working directory. A missing or malformed
/// file yields the defaults; the problem is logged, not fatal (boot checks
/// decide what is fatal).
pub fn load() -> AppConfig {
    load_from(CONFIG_FILE)
}

pub fn load_from(path: &str) -> AppConfig {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Config file {} not readable ({}); using defaults", path, e);
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&raw) {
        Ok(mut config) => {
            if config.admin.slug.trim().is_empty() {
                config.admin.slug = AdminConfig::default().slug;
            }
            config
        }
        Err(e) => {
            log::error!("Config file {} is malformed ({}); using defaults", path, e);
            AppConfig::default()
        }
    }
}
