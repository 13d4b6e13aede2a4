use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use super::appearance;
use crate::auth::{self, RateLimiter, SessionStore};
use crate::config::AppConfig;
use crate::render;
use crate::state::AppState;
use crate::view::View;
use crate::AdminSlug;

const LOGIN_WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, FromForm)]
pub struct LoginForm {
    pub password: String,
}

fn login_html(
    state: &AppState,
    admin_slug: &AdminSlug,
    cookies: &CookieJar<'_>,
    error: Option<&str>,
) -> RawHtml<String> {
    let data = state.read();
    let base = format!("/{}", admin_slug.0);
    let look = appearance(cookies);
    RawHtml(render::page(
        &View::AdminLogin {
            error,
            base: &base,
            appearance: &look,
        },
        &data,
    ))
}

#[get("/login")]
pub fn login_page(
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    login_html(state, admin_slug, cookies, None)
}

#[post("/login", data = "<form>")]
pub fn login_submit(
    form: Form<LoginForm>,
    config: &State<AppConfig>,
    sessions: &State<Arc<SessionStore>>,
    limiter: &State<Arc<RateLimiter>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    cookies: &CookieJar<'_>,
    ip: Option<IpAddr>,
) -> Result<Redirect, RawHtml<String>> {
    let ip_key = ip.map(|i| i.to_string()).unwrap_or_else(|| "unknown".to_string());
    let rate_key = format!("login:{}", auth::hash_ip(&ip_key));
    let max_attempts = config.admin.login_rate_limit.max(1);

    if !limiter.check_and_record(&rate_key, max_attempts, LOGIN_WINDOW) {
        return Err(login_html(
            state,
            admin_slug,
            cookies,
            Some("Terlalu banyak percobaan login. Coba lagi nanti."),
        ));
    }

    match auth::verify_login(&form.password, &config.admin.password_hash) {
        Ok(()) => {
            let token = sessions.create(config.admin.session_expiry_hours);
            auth::set_session_cookie(cookies, &token);
            Ok(Redirect::to(format!("/{}", admin_slug.0)))
        }
        Err(message) => Err(login_html(state, admin_slug, cookies, Some(message))),
    }
}

#[get("/logout")]
pub fn logout(
    sessions: &State<Arc<SessionStore>>,
    admin_slug: &State<AdminSlug>,
    cookies: &CookieJar<'_>,
) -> Redirect {
    if let Some(token) = auth::session_token(cookies) {
        sessions.destroy(&token);
    }
    auth::clear_session_cookie(cookies);
    Redirect::to(format!("/{}/login", admin_slug.0))
}

/// Catch-all for any admin route that failed the `AdminUser` guard.
/// Fires when the guard returns `Forward(Unauthorized)`.
#[get("/<_path..>", rank = 99)]
pub fn admin_redirect_to_login(
    _path: std::path::PathBuf,
    admin_slug: &State<AdminSlug>,
) -> Redirect {
    Redirect::to(format!("/{}/login", admin_slug.0))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![login_page, login_submit, logout, admin_redirect_to_login]
}
