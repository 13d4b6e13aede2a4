use std::sync::Arc;

use rocket::form::Form;
use rocket::http::{Cookie, CookieJar};
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::State;

use super::{appearance, THEME_COOKIE};
use crate::auth::AdminUser;
use crate::models::{BlogPost, PageContent, Product, SiteConfig};
use crate::render;
use crate::state::AppState;
use crate::store::{DataStore, StoreError};
use crate::view::{Notice, Tab, View};
use crate::AdminSlug;

// ── Dashboard ───────────────────────────────────────────

#[get("/?<tab>&<edit>")]
pub fn dashboard(
    _admin: AdminUser,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    flash: Option<FlashMessage<'_>>,
    cookies: &CookieJar<'_>,
    tab: Option<&str>,
    edit: Option<&str>,
) -> RawHtml<String> {
    let data = state.read();
    let base = format!("/{}", admin_slug.0);
    let look = appearance(cookies);
    let notice = flash.as_ref().map(|f| Notice {
        kind: f.kind(),
        message: f.message(),
    });

    RawHtml(render::page(
        &View::AdminDashboard {
            tab: Tab::from_query(tab),
            edit,
            notice,
            base: &base,
            appearance: &look,
        },
        &data,
    ))
}

#[derive(Debug, FromForm)]
pub struct AppearanceForm {
    pub value: String,
}

#[post("/appearance", data = "<form>")]
pub fn set_appearance(
    _admin: AdminUser,
    admin_slug: &State<AdminSlug>,
    cookies: &CookieJar<'_>,
    form: Form<AppearanceForm>,
) -> Redirect {
    let value = if form.value == "dark" { "dark" } else { "light" };
    let mut cookie = Cookie::new(THEME_COOKIE, value.to_string());
    cookie.set_path("/");
    cookies.add(cookie);
    Redirect::to(format!("/{}", admin_slug.0))
}

// ── Mutation plumbing ───────────────────────────────────

/// Use the submitted id, or mint one for a create.
fn ensure_id(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        id.to_string()
    }
}

/// Every admin mutation ends here: if the store call failed, surface it;
/// otherwise refetch all four collections and surface the reload result.
fn finish(
    store: &dyn DataStore,
    state: &AppState,
    admin_slug: &AdminSlug,
    tab: Tab,
    ok_message: &str,
    result: Result<(), StoreError>,
) -> Flash<Redirect> {
    let redirect = Redirect::to(format!("/{}?tab={}", admin_slug.0, tab.key()));
    match result {
        Err(e) => Flash::error(redirect, format!("Gagal: {}", e)),
        Ok(()) => match state.reload(store) {
            Ok(()) => Flash::success(redirect, ok_message.to_string()),
            Err(e) => Flash::error(
                redirect,
                format!("Tersimpan, tapi muat ulang konten gagal: {}", e),
            ),
        },
    }
}

fn reject(admin_slug: &AdminSlug, tab: Tab, message: &str) -> Flash<Redirect> {
    Flash::error(
        Redirect::to(format!("/{}?tab={}", admin_slug.0, tab.key())),
        message.to_string(),
    )
}

// ── Products ────────────────────────────────────────────

#[derive(Debug, FromForm)]
pub struct ProductFormData {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    #[field(default = false)]
    pub featured: bool,
}

#[post("/products", data = "<form>")]
pub fn save_product(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    form: Form<ProductFormData>,
) -> Flash<Redirect> {
    if form.name.trim().is_empty() {
        return reject(admin_slug, Tab::Products, "Nama produk wajib diisi.");
    }
    let product = Product {
        id: ensure_id(&form.id),
        name: form.name.trim().to_string(),
        category: form.category.trim().to_string(),
        price: form.price.max(0.0),
        description: form.description.clone(),
        image: form.image.trim().to_string(),
        featured: form.featured,
    };
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Products,
        "Produk tersimpan.",
        s.save_product(&product),
    )
}

#[post("/products/<id>/delete")]
pub fn delete_product(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    id: &str,
) -> Flash<Redirect> {
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Products,
        "Produk dihapus.",
        s.delete_product(id),
    )
}

// ── Blog posts ──────────────────────────────────────────

#[derive(Debug, FromForm)]
pub struct BlogFormData {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub image: String,
}

#[post("/blogs", data = "<form>")]
pub fn save_blog(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    form: Form<BlogFormData>,
) -> Flash<Redirect> {
    if form.title.trim().is_empty() {
        return reject(admin_slug, Tab::Blogs, "Judul tulisan wajib diisi.");
    }
    let date = if form.date.trim().is_empty() {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    } else {
        form.date.trim().to_string()
    };
    let post = BlogPost {
        id: ensure_id(&form.id),
        title: form.title.trim().to_string(),
        excerpt: form.excerpt.clone(),
        content: form.content.clone(),
        author: form.author.trim().to_string(),
        date,
        image: form.image.trim().to_string(),
    };
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Blogs,
        "Tulisan tersimpan.",
        s.save_blog(&post),
    )
}

#[post("/blogs/<id>/delete")]
pub fn delete_blog(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    id: &str,
) -> Flash<Redirect> {
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Blogs,
        "Tulisan dihapus.",
        s.delete_blog(id),
    )
}

// ── Pages ───────────────────────────────────────────────

#[derive(Debug, FromForm)]
pub struct PageFormData {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
}

#[post("/pages", data = "<form>")]
pub fn save_page(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    form: Form<PageFormData>,
) -> Flash<Redirect> {
    if form.title.trim().is_empty() {
        return reject(admin_slug, Tab::Pages, "Judul halaman wajib diisi.");
    }
    // Slug is the routing key: derive from the title when left empty,
    // normalize when given.
    let slug_source = if form.slug.trim().is_empty() {
        form.title.trim()
    } else {
        form.slug.trim()
    };
    let page = PageContent {
        id: ensure_id(&form.id),
        slug: slug::slugify(slug_source),
        title: form.title.trim().to_string(),
        content: form.content.clone(),
    };
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Pages,
        "Halaman tersimpan.",
        s.save_page(&page),
    )
}

#[post("/pages/<id>/delete")]
pub fn delete_page(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    id: &str,
) -> Flash<Redirect> {
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Pages,
        "Halaman dihapus.",
        s.delete_page(id),
    )
}

// ── Settings ────────────────────────────────────────────

#[derive(Debug, FromForm)]
pub struct ConfigFormData {
    pub shop_name: String,
    pub logo: String,
    pub theme_color: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub about_title: String,
    pub about_text: String,
    pub about_image: String,
    pub footer_text: String,
}

#[post("/settings", data = "<form>")]
pub fn save_settings(
    _admin: AdminUser,
    store: &State<Arc<dyn DataStore>>,
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    form: Form<ConfigFormData>,
) -> Flash<Redirect> {
    if form.shop_name.trim().is_empty() {
        return reject(admin_slug, Tab::Settings, "Nama toko wajib diisi.");
    }
    // The singleton is overwritten wholesale; a malformed theme color is
    // stored as-is and degrades to the default palette at render time.
    let config = SiteConfig {
        shop_name: form.shop_name.trim().to_string(),
        logo: form.logo.trim().to_string(),
        theme_color: form.theme_color.trim().to_string(),
        contact_email: form.contact_email.trim().to_string(),
        contact_phone: form.contact_phone.trim().to_string(),
        contact_address: form.contact_address.trim().to_string(),
        hero_title: form.hero_title.trim().to_string(),
        hero_subtitle: form.hero_subtitle.trim().to_string(),
        hero_image: form.hero_image.trim().to_string(),
        about_title: form.about_title.trim().to_string(),
        about_text: form.about_text.clone(),
        about_image: form.about_image.trim().to_string(),
        footer_text: form.footer_text.trim().to_string(),
    };
    let s: &dyn DataStore = &**store.inner();
    finish(
        s,
        state,
        admin_slug,
        Tab::Settings,
        "Pengaturan tersimpan.",
        s.save_site_config(&config),
    )
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        dashboard,
        set_appearance,
        save_product,
        delete_product,
        save_blog,
        delete_blog,
        save_page,
        delete_page,
        save_settings
    ]
}
