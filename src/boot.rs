use log::{error, info, warn};
use std::path::Path;
use std::process;

use crate::config::{AppConfig, CONFIG_FILE};

/// Run all boot checks. Call this before Rocket launches.
/// Warns about degraded configuration and aborts on fatal problems.
pub fn run(config: &AppConfig) {
    info!("Etalase boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Config file ─────────────────────────────────
    if !Path::new(CONFIG_FILE).exists() {
        warn!("  {} not found — running on defaults", CONFIG_FILE);
        warnings += 1;
    }

    // ── 2. Backend URL ─────────────────────────────────
    if config.backend.url == "memory" {
        warn!("  Backend is the in-process memory store; content will not survive restarts");
        warnings += 1;
    } else {
        match url::Url::parse(&config.backend.url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => {
                error!(
                    "  Backend URL scheme '{}' is not supported (http/https only)",
                    parsed.scheme()
                );
                errors += 1;
            }
            Err(e) => {
                error!("  Backend URL '{}' is invalid: {}", config.backend.url, e);
                errors += 1;
            }
        }
        if config.backend.api_key.is_empty() {
            warn!("  No backend API key configured; requests go out unauthenticated");
            warnings += 1;
        }
    }

    // ── 3. Admin credentials ───────────────────────────
    if config.uses_default_password() {
        warn!("  Admin password is the default ('admin') — set admin.password_hash");
        warnings += 1;
    }
    if config.admin.session_expiry_hours < 1 {
        warn!("  admin.session_expiry_hours below 1; clamped to 1");
        warnings += 1;
    }

    // ── 4. Rocket.toml ─────────────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default server config");
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
