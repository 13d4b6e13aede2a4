use rocket::http::CookieJar;

pub mod admin;
pub mod auth;
pub mod public;

/// Appearance cookie set by the dashboard toggle; "auto" (absent) defers to
/// the system color scheme.
pub const THEME_COOKIE: &str = "etalase_theme";

pub(crate) fn appearance(cookies: &CookieJar<'_>) -> String {
    cookies
        .get(THEME_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_else(|| "auto".to_string())
}
