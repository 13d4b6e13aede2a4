#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::response::content::RawHtml;

mod auth;
mod boot;
mod config;
mod feed;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod tasks;
mod theme;
mod view;

#[cfg(test)]
mod tests;

use auth::{RateLimiter, SessionStore};
use config::AppConfig;
use state::AppState;
use store::memory::MemoryStore;
use store::remote::RemoteStore;
use store::DataStore;

/// Holds the admin URL slug, read from config at startup.
/// Shared via Rocket managed state so routes and fairings can access it.
pub struct AdminSlug(pub String);

pub struct NoCacheAdmin;

#[rocket::async_trait]
impl Fairing for NoCacheAdmin {
    fn info(&self) -> Info {
        Info { name: "No-Cache Admin Pages", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        let slug = req.rocket().state::<AdminSlug>()
            .map(|s| s.0.as_str())
            .unwrap_or("admin");
        let prefix = format!("/{}", slug);
        if req.uri().path().starts_with(&*prefix) {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Halaman tidak ditemukan.</p><a href='/'>&larr; Beranda</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Terjadi kesalahan pada server.</p><a href='/'>&larr; Beranda</a></body></html>".to_string())
}

fn build_store(config: &AppConfig) -> Arc<dyn DataStore> {
    if config.backend.url == "memory" {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(RemoteStore::new(&config.backend.url, &config.backend.api_key))
    }
}

/// Assemble the Rocket instance. Kept apart from `#[launch]` so the test
/// suite can stand up the same application over a `MemoryStore`.
pub fn build_rocket(
    config: AppConfig,
    store: Arc<dyn DataStore>,
    app_state: AppState,
) -> rocket::Rocket<rocket::Build> {
    let admin_mount = format!("/{}", config.admin.slug);
    let admin_slug = AdminSlug(config.admin.slug.clone());

    rocket::build()
        .manage(config)
        .manage(store)
        .manage(app_state)
        .manage(Arc::new(SessionStore::new()))
        .manage(Arc::new(RateLimiter::new()))
        .manage(admin_slug)
        .attach(NoCacheAdmin)
        .attach(tasks::SessionSweeper)
        .mount("/", routes::public::routes())
        .mount(&admin_mount, routes::admin::routes())
        .mount(&admin_mount, routes::auth::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let mut config = config::load();

    // Boot check: validate config, warn about degraded modes
    boot::run(&config);

    if config.admin.password_hash.is_empty() {
        config.admin.password_hash = auth::hash_password(config::DEFAULT_ADMIN_PASSWORD)
            .expect("Failed to hash default admin password");
    }

    let store = build_store(&config);

    // Initial parallel fetch of all four collections. Nothing is served
    // until every one of them has resolved.
    let app_state = AppState::load(&*store).expect("Failed to load content from the backend");

    eprintln!("Admin panel mounted at: /{}", config.admin.slug);

    build_rocket(config, store, app_state)
}
