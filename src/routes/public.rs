use rocket::response::content::{RawHtml, RawXml};
use rocket::response::Redirect;
use rocket::State;

use crate::config::AppConfig;
use crate::feed;
use crate::render;
use crate::state::AppState;
use crate::view::View;
use crate::AdminSlug;

// ── Home ────────────────────────────────────────────────

/// `?page=admin` is the admin entry switch; every other value (or none)
/// renders the homepage.
#[get("/?<page>")]
pub fn home(
    state: &State<AppState>,
    admin_slug: &State<AdminSlug>,
    page: Option<&str>,
) -> Result<RawHtml<String>, Redirect> {
    if page == Some("admin") {
        return Err(Redirect::to(format!("/{}/login", admin_slug.0)));
    }
    let data = state.read();
    Ok(RawHtml(render::page(&View::Home, &data)))
}

// ── Shop ────────────────────────────────────────────────

#[get("/shop?<category>")]
pub fn shop(state: &State<AppState>, category: Option<&str>) -> RawHtml<String> {
    let data = state.read();
    RawHtml(render::page(&View::Shop { category }, &data))
}

/// Unknown ids fall back to the shop list instead of failing.
#[get("/shop/<id>")]
pub fn product_detail(state: &State<AppState>, id: &str) -> Result<RawHtml<String>, Redirect> {
    let data = state.read();
    match data.product(id) {
        Some(product) => Ok(RawHtml(render::page(&View::ProductDetail(product), &data))),
        None => Err(Redirect::to("/shop")),
    }
}

// ── Blog ────────────────────────────────────────────────

#[get("/blog")]
pub fn blog_list(state: &State<AppState>) -> RawHtml<String> {
    let data = state.read();
    RawHtml(render::page(&View::Blog, &data))
}

#[get("/blog/<id>")]
pub fn blog_detail(state: &State<AppState>, id: &str) -> Result<RawHtml<String>, Redirect> {
    let data = state.read();
    match data.blog(id) {
        Some(post) => Ok(RawHtml(render::page(&View::BlogDetail(post), &data))),
        None => Err(Redirect::to("/blog")),
    }
}

// ── Dynamic pages ───────────────────────────────────────

#[get("/p/<slug>")]
pub fn dynamic_page(state: &State<AppState>, slug: &str) -> Option<RawHtml<String>> {
    let data = state.read();
    let page = data.page_by_slug(slug)?;
    Some(RawHtml(render::page(&View::DynamicPage(page), &data)))
}

// ── RSS ─────────────────────────────────────────────────

#[get("/feed.xml")]
pub fn blog_feed(state: &State<AppState>, config: &State<AppConfig>) -> RawXml<String> {
    let data = state.read();
    RawXml(feed::blog_feed(&data, &config.site_url))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        home,
        shop,
        product_detail,
        blog_list,
        blog_detail,
        dynamic_page,
        blog_feed
    ]
}
