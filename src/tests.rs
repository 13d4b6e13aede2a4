#![cfg(test)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

use crate::auth::{self, RateLimiter, SessionStore};
use crate::config::{AdminConfig, AppConfig, BackendConfig};
use crate::models::{BlogPost, PageContent, Product, SiteConfig};
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::DataStore;

/// Fast bcrypt hash for tests (cost=4 instead of DEFAULT_COST=12).
fn fast_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

fn test_config() -> AppConfig {
    AppConfig {
        site_url: "http://toko.test".to_string(),
        backend: BackendConfig {
            url: "memory".to_string(),
            api_key: String::new(),
        },
        admin: AdminConfig {
            slug: "admin".to_string(),
            password_hash: fast_hash("rahasia"),
            session_expiry_hours: 24,
            login_rate_limit: 5,
        },
    }
}

fn product(id: &str, name: &str, category: &str, price: f64, featured: bool) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: format!("Deskripsi {}", name),
        image: String::new(),
        featured,
    }
}

fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store
        .save_product(&product("p1", "Kopi Arabika", "Kopi", 85000.0, true))
        .unwrap();
    store
        .save_product(&product("p2", "Teh Melati", "Teh", 40000.0, false))
        .unwrap();
    store
        .save_blog(&BlogPost {
            id: "b1".to_string(),
            title: "Cara seduh V60".to_string(),
            excerpt: "Panduan singkat menyeduh".to_string(),
            content: "Seduh dengan air *panas* 92 derajat.".to_string(),
            author: "Sari".to_string(),
            date: "2024-05-01".to_string(),
            image: String::new(),
        })
        .unwrap();
    store
        .save_blog(&BlogPost {
            id: "b2".to_string(),
            title: "Kopi musim ini".to_string(),
            excerpt: "Panen terbaru".to_string(),
            content: "Stok baru sudah datang.".to_string(),
            author: String::new(),
            date: "2024-06-10".to_string(),
            image: String::new(),
        })
        .unwrap();
    store
        .save_page(&PageContent {
            id: "g1".to_string(),
            slug: "tentang-kami".to_string(),
            title: "Tentang Kami".to_string(),
            content: "Kami toko **keluarga**.".to_string(),
        })
        .unwrap();
    store
        .save_site_config(&SiteConfig {
            shop_name: "Toko Kopi Nusantara".to_string(),
            theme_color: "#2563EB".to_string(),
            hero_title: "Kopi segar setiap hari".to_string(),
            contact_email: "halo@toko.test".to_string(),
            ..SiteConfig::default()
        })
        .unwrap();
    Arc::new(store)
}

fn test_client(store: Arc<MemoryStore>) -> Client {
    let state = AppState::load(&*store).expect("initial load");
    let store_dyn: Arc<dyn DataStore> = store;
    Client::tracked(crate::build_rocket(test_config(), store_dyn, state)).expect("valid rocket")
}

fn login(client: &Client) {
    let resp = client
        .post("/admin/login")
        .header(ContentType::Form)
        .body("password=rahasia")
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/admin"));
}

// ═══════════════════════════════════════════════════════════
// Store semantics
// ═══════════════════════════════════════════════════════════

#[test]
fn store_upsert_replaces_matching_id() {
    let store = MemoryStore::new();
    store.save_product(&product("p1", "Kopi", "Kopi", 1000.0, false)).unwrap();
    store.save_product(&product("p1", "Kopi Gayo", "Kopi", 2000.0, true)).unwrap();

    let products = store.products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Kopi Gayo");
    assert!(products[0].featured);
}

#[test]
fn store_delete_by_id() {
    let store = MemoryStore::new();
    store.save_product(&product("p1", "A", "X", 1.0, false)).unwrap();
    store.save_product(&product("p2", "B", "X", 2.0, false)).unwrap();
    store.delete_product("p1").unwrap();

    let products = store.products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "p2");

    // Deleting an unknown id is a no-op, not an error.
    store.delete_product("ghost").unwrap();
    assert_eq!(store.products().unwrap().len(), 1);
}

#[test]
fn store_config_is_singleton_overwritten_wholesale() {
    let store = MemoryStore::new();
    assert_eq!(store.site_config().unwrap(), SiteConfig::default());

    let mut config = SiteConfig::default();
    config.shop_name = "Toko A".to_string();
    config.footer_text = "punya kaki".to_string();
    store.save_site_config(&config).unwrap();

    let mut replacement = SiteConfig::default();
    replacement.shop_name = "Toko B".to_string();
    store.save_site_config(&replacement).unwrap();

    let loaded = store.site_config().unwrap();
    assert_eq!(loaded.shop_name, "Toko B");
    assert!(loaded.footer_text.is_empty());
}

// ═══════════════════════════════════════════════════════════
// Application state
// ═══════════════════════════════════════════════════════════

#[test]
fn state_load_orders_blogs_newest_first() {
    let store = seeded_store();
    let state = AppState::load(&*store).unwrap();
    let data = state.read();
    assert_eq!(data.blogs[0].id, "b2");
    assert_eq!(data.blogs[1].id, "b1");
    assert!(data.product("p1").is_some());
    assert!(data.product("nope").is_none());
    assert!(data.page_by_slug("tentang-kami").is_some());
}

#[test]
fn state_reload_reflects_backend_changes() {
    let store = seeded_store();
    let state = AppState::load(&*store).unwrap();

    store
        .save_product(&product("p3", "Gula Aren", "Gula", 25000.0, false))
        .unwrap();
    store.delete_product("p1").unwrap();

    // Stale until reloaded
    assert!(state.read().product("p3").is_none());
    assert!(state.read().product("p1").is_some());

    state.reload(&*store).unwrap();
    assert!(state.read().product("p3").is_some());
    assert!(state.read().product("p1").is_none());
}

// ═══════════════════════════════════════════════════════════
// Auth
// ═══════════════════════════════════════════════════════════

#[test]
fn verify_login_rejects_with_fixed_message() {
    let hash = fast_hash("benar");
    assert!(auth::verify_login("benar", &hash).is_ok());
    assert_eq!(auth::verify_login("salah", &hash), Err("Login gagal"));
    assert_eq!(auth::verify_login("benar", ""), Err("Login gagal"));
}

#[test]
fn session_lifecycle() {
    let sessions = SessionStore::new();
    let token = sessions.create(24);
    assert!(sessions.validate(&token));
    assert!(!sessions.validate("not-a-token"));
    sessions.destroy(&token);
    assert!(!sessions.validate(&token));
}

#[test]
fn session_expiry_honored() {
    let sessions = SessionStore::new();
    let expired = Utc::now().naive_utc() - Duration::hours(1);
    sessions.insert("old-token", expired);
    assert!(!sessions.validate("old-token"));

    let token = sessions.create(24);
    assert_eq!(sessions.cleanup_expired(), 1);
    assert!(sessions.validate(&token));
}

#[test]
fn rate_limiter_blocks_after_max_attempts() {
    let limiter = RateLimiter::new();
    let window = std::time::Duration::from_secs(60);
    for _ in 0..5 {
        assert!(limiter.check_and_record("login:x", 5, window));
    }
    assert!(!limiter.check_and_record("login:x", 5, window));
    // Other keys are unaffected
    assert!(limiter.check_and_record("login:y", 5, window));
}

// ═══════════════════════════════════════════════════════════
// Config + models
// ═══════════════════════════════════════════════════════════

#[test]
fn config_missing_file_yields_defaults() {
    let config = crate::config::load_from("/nonexistent/etalase.toml");
    assert_eq!(config.backend.url, "memory");
    assert_eq!(config.admin.slug, "admin");
    assert_eq!(config.admin.session_expiry_hours, 24);
    assert!(config.uses_default_password());
}

#[test]
fn config_parses_file() {
    let path = std::env::temp_dir().join("etalase_test_config.toml");
    std::fs::write(
        &path,
        r#"
site_url = "https://toko.example"

[backend]
url = "https://data.example/v1"
api_key = "k123"

[admin]
slug = "panel"
password_hash = "$2b$04$abcdefghijklmnopqrstuv"
session_expiry_hours = 6
login_rate_limit = 3
"#,
    )
    .unwrap();

    let config = crate::config::load_from(path.to_str().unwrap());
    std::fs::remove_file(&path).ok();

    assert_eq!(config.site_url, "https://toko.example");
    assert_eq!(config.backend.url, "https://data.example/v1");
    assert_eq!(config.backend.api_key, "k123");
    assert_eq!(config.admin.slug, "panel");
    assert_eq!(config.admin.session_expiry_hours, 6);
    assert_eq!(config.admin.login_rate_limit, 3);
}

#[test]
fn config_malformed_file_yields_defaults() {
    let path = std::env::temp_dir().join("etalase_test_broken.toml");
    std::fs::write(&path, "this is [not toml").unwrap();
    let config = crate::config::load_from(path.to_str().unwrap());
    std::fs::remove_file(&path).ok();
    assert_eq!(config.backend.url, "memory");
}

#[test]
fn models_tolerate_sparse_backend_documents() {
    let product: Product = serde_json::from_str(r#"{"id":"x","name":"Kopi"}"#).unwrap();
    assert_eq!(product.price, 0.0);
    assert!(!product.featured);

    let config: SiteConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SiteConfig::default());

    let post: BlogPost = serde_json::from_str(r#"{"id":"b","title":"T","date":"bukan-iso"}"#).unwrap();
    assert_eq!(post.display_date(), "bukan-iso");
}

#[test]
fn product_categories_are_deduped_and_sorted() {
    let products = vec![
        product("1", "A", "Teh", 1.0, false),
        product("2", "B", "Kopi", 1.0, false),
        product("3", "C", "Teh", 1.0, false),
        product("4", "D", "", 1.0, false),
    ];
    assert_eq!(Product::categories(&products), vec!["Kopi", "Teh"]);
}

// ═══════════════════════════════════════════════════════════
// HTTP: public pages
// ═══════════════════════════════════════════════════════════

#[test]
fn homepage_renders_shop_and_palette() {
    let client = test_client(seeded_store());
    let resp = client.get("/").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let body = resp.into_string().unwrap();
    assert!(body.contains("Toko Kopi Nusantara"));
    assert!(body.contains("Kopi segar setiap hari"));
    // Palette derived from the configured #2563EB
    assert!(body.contains("--primary-600: 37 99 235;"));
    assert!(body.contains("--primary-950: 15 40 94;"));
    // Featured product appears on the homepage; non-featured does not
    assert!(body.contains("Kopi Arabika"));
    assert!(!body.contains("Teh Melati"));
}

#[test]
fn entry_switch_routes_to_admin_login() {
    let client = test_client(seeded_store());

    let resp = client.get("/?page=admin").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/admin/login"));

    // Any other value renders the homepage
    let resp = client.get("/?page=shop").dispatch();
    assert_eq!(resp.status(), Status::Ok);
}

#[test]
fn shop_filters_by_category() {
    let client = test_client(seeded_store());

    let body = client.get("/shop").dispatch().into_string().unwrap();
    assert!(body.contains("Kopi Arabika"));
    assert!(body.contains("Teh Melati"));

    let body = client
        .get("/shop?category=Teh")
        .dispatch()
        .into_string()
        .unwrap();
    assert!(body.contains("Teh Melati"));
    assert!(!body.contains("Kopi Arabika"));
}

#[test]
fn product_detail_renders_and_unknown_falls_back() {
    let client = test_client(seeded_store());

    let body = client.get("/shop/p1").dispatch().into_string().unwrap();
    assert!(body.contains("Kopi Arabika"));
    assert!(body.contains("Rp 85.000"));

    let resp = client.get("/shop/tidak-ada").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/shop"));
}

#[test]
fn blog_detail_renders_markdown_and_unknown_falls_back() {
    let client = test_client(seeded_store());

    let body = client.get("/blog/b1").dispatch().into_string().unwrap();
    assert!(body.contains("Cara seduh V60"));
    assert!(body.contains("<em>panas</em>"));

    let resp = client.get("/blog/tidak-ada").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/blog"));
}

#[test]
fn dynamic_page_renders_and_unknown_is_404() {
    let client = test_client(seeded_store());

    let body = client.get("/p/tentang-kami").dispatch().into_string().unwrap();
    assert!(body.contains("Tentang Kami"));
    assert!(body.contains("<strong>keluarga</strong>"));

    let resp = client.get("/p/tidak-ada").dispatch();
    assert_eq!(resp.status(), Status::NotFound);
}

#[test]
fn feed_lists_blog_posts() {
    let client = test_client(seeded_store());
    let resp = client.get("/feed.xml").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let body = resp.into_string().unwrap();
    assert!(body.contains("<rss"));
    assert!(body.contains("Cara seduh V60"));
    assert!(body.contains("http://toko.test/blog/b1"));
}

// ═══════════════════════════════════════════════════════════
// HTTP: auth gate
// ═══════════════════════════════════════════════════════════

#[test]
fn dashboard_requires_login() {
    let client = test_client(seeded_store());
    let resp = client.get("/admin").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/admin/login"));
}

#[test]
fn unauthenticated_mutation_does_not_reach_the_store() {
    let store = seeded_store();
    let client = test_client(store.clone());
    let resp = client
        .post("/admin/products")
        .header(ContentType::Form)
        .body("id=&name=Penyusup&category=&price=1&description=&image=")
        .dispatch();
    // The guard forwards with 401 and no other POST route matches
    assert_eq!(resp.status(), Status::Unauthorized);
    assert_eq!(store.products().unwrap().len(), 2);
}

#[test]
fn wrong_password_shows_login_gagal() {
    let client = test_client(seeded_store());
    let resp = client
        .post("/admin/login")
        .header(ContentType::Form)
        .body("password=salah")
        .dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let body = resp.into_string().unwrap();
    assert!(body.contains("Login gagal"));
    // Still the login form, not the dashboard
    assert!(body.contains("/admin/login"));
}

#[test]
fn repeated_attempts_hit_the_rate_limit() {
    let client = test_client(seeded_store());
    for _ in 0..5 {
        let resp = client
            .post("/admin/login")
            .header(ContentType::Form)
            .body("password=salah")
            .dispatch();
        assert_eq!(resp.status(), Status::Ok);
    }
    // Even the right password is refused inside the window
    let resp = client
        .post("/admin/login")
        .header(ContentType::Form)
        .body("password=rahasia")
        .dispatch();
    let body = resp.into_string().unwrap();
    assert!(body.contains("Terlalu banyak percobaan login"));
}

#[test]
fn login_then_logout() {
    let client = test_client(seeded_store());
    login(&client);

    let resp = client.get("/admin").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    assert!(resp.into_string().unwrap().contains("Dashboard"));

    let resp = client.get("/admin/logout").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);

    let resp = client.get("/admin").dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(resp.headers().get_one("Location"), Some("/admin/login"));
}

// ═══════════════════════════════════════════════════════════
// HTTP: admin mutations
// ═══════════════════════════════════════════════════════════

#[test]
fn product_crud_through_the_dashboard() {
    let store = seeded_store();
    let client = test_client(store.clone());
    login(&client);

    // Create: an empty id mints one
    let resp = client
        .post("/admin/products")
        .header(ContentType::Form)
        .body("id=&name=Gula+Aren&category=Gula&price=25000&description=Manis&image=&featured=on")
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);

    let products = store.products().unwrap();
    assert_eq!(products.len(), 3);
    let created = products.iter().find(|p| p.name == "Gula Aren").unwrap();
    assert!(!created.id.is_empty());
    assert!(created.featured);
    let id = created.id.clone();

    // The reload means the dashboard (and the shop) see it immediately
    let body = client.get("/admin?tab=products").dispatch().into_string().unwrap();
    assert!(body.contains("Gula Aren"));
    let body = client.get("/shop").dispatch().into_string().unwrap();
    assert!(body.contains("Gula Aren"));

    // Update keeps the id (upsert)
    let resp = client
        .post("/admin/products")
        .header(ContentType::Form)
        .body(format!(
            "id={}&name=Gula+Aren+Premium&category=Gula&price=30000&description=Manis&image=",
            id
        ))
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    let products = store.products().unwrap();
    assert_eq!(products.len(), 3);
    let updated = products.iter().find(|p| p.id == id).unwrap();
    assert_eq!(updated.name, "Gula Aren Premium");
    assert!(!updated.featured);

    // Delete
    let delete_uri = format!("/admin/products/{}/delete", id);
    let resp = client.post(delete_uri.as_str()).dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(store.products().unwrap().len(), 2);
    let body = client.get("/shop").dispatch().into_string().unwrap();
    assert!(!body.contains("Gula Aren"));
}

#[test]
fn empty_product_name_is_rejected() {
    let store = seeded_store();
    let client = test_client(store.clone());
    login(&client);

    let resp = client
        .post("/admin/products")
        .header(ContentType::Form)
        .body("id=&name=++&category=&price=10&description=&image=")
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);
    assert_eq!(store.products().unwrap().len(), 2);
}

#[test]
fn page_slug_is_derived_from_title_when_empty() {
    let store = seeded_store();
    let client = test_client(store.clone());
    login(&client);

    let resp = client
        .post("/admin/pages")
        .header(ContentType::Form)
        .body("id=&slug=&title=Syarat+%26+Ketentuan&content=Isi")
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);

    let pages = store.pages().unwrap();
    let created = pages.iter().find(|p| p.title == "Syarat & Ketentuan").unwrap();
    assert_eq!(created.slug, "syarat-ketentuan");

    // And the page is routable straight away
    let resp = client.get("/p/syarat-ketentuan").dispatch();
    assert_eq!(resp.status(), Status::Ok);
}

#[test]
fn blog_save_defaults_the_date() {
    let store = seeded_store();
    let client = test_client(store.clone());
    login(&client);

    let resp = client
        .post("/admin/blogs")
        .header(ContentType::Form)
        .body("id=&title=Tanpa+tanggal&excerpt=&content=Isi&author=&date=&image=")
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);

    let blogs = store.blogs().unwrap();
    let created = blogs.iter().find(|b| b.title == "Tanpa tanggal").unwrap();
    assert_eq!(created.date, Utc::now().format("%Y-%m-%d").to_string());
}

#[test]
fn settings_save_rethemes_the_site() {
    let store = seeded_store();
    let client = test_client(store.clone());
    login(&client);

    let resp = client
        .post("/admin/settings")
        .header(ContentType::Form)
        .body(
            "shop_name=Toko+Baru&logo=&theme_color=%23059669&contact_email=&contact_phone=&\
             contact_address=&hero_title=Halo&hero_subtitle=&hero_image=&about_title=Tentang&\
             about_text=&about_image=&footer_text=",
        )
        .dispatch();
    assert_eq!(resp.status(), Status::SeeOther);

    assert_eq!(store.site_config().unwrap().shop_name, "Toko Baru");

    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("Toko Baru"));
    // #059669 is the new base: shade 600 is the color itself
    assert!(body.contains("--primary-600: 5 150 105;"));
    assert!(!body.contains("--primary-600: 37 99 235;"));
}

#[test]
fn malformed_theme_color_degrades_to_default_palette() {
    let store = seeded_store();
    let mut config = store.site_config().unwrap();
    config.theme_color = "warna-warni".to_string();
    store.save_site_config(&config).unwrap();

    let client = test_client(store);
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("--primary-600: 37 99 235;"));
}
