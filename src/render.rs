//! Page renderers. Every view becomes a complete HTML document built in
//! Rust; the theme palette and a small stylesheet are inlined so no static
//! assets ship with the binary.

use pulldown_cmark::{html, Parser};

use crate::models::{BlogPost, PageContent, Product, SiteConfig};
use crate::state::SiteData;
use crate::theme;
use crate::view::{Notice, Tab, View};

/// Render the active view. The match is exhaustive on purpose: adding a
/// view variant without a renderer must not compile.
pub fn page(view: &View<'_>, data: &SiteData) -> String {
    match view {
        View::Home => public_layout(data, "Beranda", "home", &render_home(data)),
        View::Shop { category } => {
            public_layout(data, "Shop", "shop", &render_shop(data, *category))
        }
        View::ProductDetail(product) => {
            public_layout(data, &product.name, "shop", &render_product_detail(product))
        }
        View::Blog => public_layout(data, "Blog", "blog", &render_blog(data)),
        View::BlogDetail(post) => {
            public_layout(data, &post.title, "blog", &render_blog_detail(post))
        }
        View::DynamicPage(page) => {
            public_layout(data, &page.title, &page.slug, &render_dynamic_page(page))
        }
        View::AdminLogin {
            error,
            base,
            appearance,
        } => render_admin_login(&data.config, *error, base, appearance),
        View::AdminDashboard {
            tab,
            edit,
            notice,
            base,
            appearance,
        } => render_admin_dashboard(data, *tab, *edit, notice, base, appearance),
    }
}

// ── Helpers ─────────────────────────────────────────────

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Markdown → HTML for blog and page bodies.
pub fn markdown(src: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(src));
    out
}

/// Rupiah display: `Rp 1.500.000`. Prices are stored as f64 but shown whole.
pub fn format_price(price: f64) -> String {
    let whole = price.round().max(0.0) as i64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {}", grouped)
}

fn img_or_placeholder(url: &str, alt: &str, class: &str) -> String {
    if url.trim().is_empty() {
        format!(r#"<div class="{} placeholder"></div>"#, class)
    } else {
        format!(
            r#"<img class="{}" src="{}" alt="{}">"#,
            class,
            html_escape(url),
            html_escape(alt)
        )
    }
}

// ── Public layout ───────────────────────────────────────

const PUBLIC_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { font-family: system-ui, sans-serif; color: #1f2937; background: #fff; }
a { color: rgb(var(--primary-600)); text-decoration: none; }
header.site { display: flex; align-items: center; gap: 24px; padding: 16px 24px;
  border-bottom: 1px solid rgb(var(--primary-100)); }
header.site .brand { font-size: 1.25rem; font-weight: 700; color: rgb(var(--primary-700)); }
header.site img.logo { height: 36px; }
header.site nav { display: flex; gap: 16px; margin-left: auto; }
header.site nav a.active { color: rgb(var(--primary-800)); font-weight: 600;
  border-bottom: 2px solid rgb(var(--primary-600)); }
main { max-width: 960px; margin: 0 auto; padding: 32px 24px; }
.hero { background: rgb(var(--primary-50)); border-radius: 12px; padding: 48px 32px;
  text-align: center; margin-bottom: 40px; }
.hero h1 { font-size: 2.25rem; color: rgb(var(--primary-900)); }
.hero p { margin-top: 8px; color: rgb(var(--primary-700)); }
.hero img { max-width: 100%; border-radius: 8px; margin-top: 24px; }
.hero a.cta { display: inline-block; margin-top: 24px; padding: 10px 24px; border-radius: 8px;
  background: rgb(var(--primary-600)); color: #fff; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; }
.card { border: 1px solid rgb(var(--primary-100)); border-radius: 10px; overflow: hidden; }
.card .body { padding: 12px 14px; }
.card img, .card .placeholder { width: 100%; height: 160px; object-fit: cover;
  background: rgb(var(--primary-100)); display: block; }
.card .category { font-size: 0.75rem; text-transform: uppercase; color: rgb(var(--primary-500)); }
.card .price { font-weight: 700; color: rgb(var(--primary-700)); margin-top: 4px; }
.filters { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 24px; }
.filters a { padding: 6px 14px; border-radius: 999px; border: 1px solid rgb(var(--primary-200)); }
.filters a.active { background: rgb(var(--primary-600)); color: #fff; }
.detail { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
.detail img, .detail .placeholder { width: 100%; border-radius: 10px;
  background: rgb(var(--primary-100)); min-height: 240px; }
.detail .price { font-size: 1.5rem; font-weight: 700; color: rgb(var(--primary-700)); margin: 12px 0; }
.posts article { border-bottom: 1px solid rgb(var(--primary-100)); padding: 24px 0; }
.posts .meta, article.post .meta { font-size: 0.85rem; color: #6b7280; margin: 4px 0 8px; }
article.post img.cover { max-width: 100%; border-radius: 10px; margin: 16px 0; }
.prose h1, .prose h2, .prose h3 { margin: 20px 0 8px; }
.prose p, .prose ul, .prose ol { margin: 10px 0; line-height: 1.6; }
.about { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; margin-top: 48px; }
.about img, .about .placeholder { width: 100%; border-radius: 10px; background: rgb(var(--primary-100)); }
footer.site { border-top: 1px solid rgb(var(--primary-100)); margin-top: 48px;
  padding: 24px; text-align: center; color: #6b7280; font-size: 0.9rem; }
section h2 { margin: 32px 0 16px; color: rgb(var(--primary-900)); }
.empty { color: #6b7280; padding: 24px 0; }
"#;

fn public_layout(data: &SiteData, title: &str, active: &str, body: &str) -> String {
    let config = &data.config;
    let css_vars = theme::css_variables(&config.theme_color);

    let brand = if config.logo.trim().is_empty() {
        format!(
            r#"<a class="brand" href="/">{}</a>"#,
            html_escape(&config.shop_name)
        )
    } else {
        format!(
            r#"<a class="brand" href="/"><img class="logo" src="{}" alt="{}"></a>"#,
            html_escape(&config.logo),
            html_escape(&config.shop_name)
        )
    };

    let mut nav = String::new();
    for (href, label, key) in [("/", "Beranda", "home"), ("/shop", "Shop", "shop"), ("/blog", "Blog", "blog")] {
        let class = if key == active { r#" class="active""# } else { "" };
        nav.push_str(&format!(r#"<a href="{}"{}>{}</a>"#, href, class, label));
    }
    for page in &data.pages {
        let class = if page.slug == active { r#" class="active""# } else { "" };
        nav.push_str(&format!(
            r#"<a href="/p/{}"{}>{}</a>"#,
            html_escape(&page.slug),
            class,
            html_escape(&page.title)
        ));
    }

    let mut contact = String::new();
    for part in [&config.contact_email, &config.contact_phone, &config.contact_address] {
        if !part.trim().is_empty() {
            if !contact.is_empty() {
                contact.push_str(" · ");
            }
            contact.push_str(&html_escape(part));
        }
    }

    let footer_text = if config.footer_text.trim().is_empty() {
        format!("&copy; {}", html_escape(&config.shop_name))
    } else {
        html_escape(&config.footer_text)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — {shop}</title>
<link rel="alternate" type="application/rss+xml" href="/feed.xml">
<style>
{css_vars}
{css}
</style>
</head>
<body>
<header class="site">{brand}<nav>{nav}</nav></header>
<main>
{body}
</main>
<footer class="site"><p>{footer}</p><p>{contact}</p></footer>
</body>
</html>"#,
        title = html_escape(title),
        shop = html_escape(&config.shop_name),
        css_vars = css_vars,
        css = PUBLIC_CSS,
        brand = brand,
        nav = nav,
        body = body,
        footer = footer_text,
        contact = contact,
    )
}

// ── Public pages ────────────────────────────────────────

fn product_card(product: &Product) -> String {
    format!(
        r#"<a class="card" href="/shop/{id}">{img}<div class="body"><div class="category">{category}</div><div>{name}</div><div class="price">{price}</div></div></a>"#,
        id = html_escape(&product.id),
        img = img_or_placeholder(&product.image, &product.name, "thumb"),
        category = html_escape(&product.category),
        name = html_escape(&product.name),
        price = format_price(product.price),
    )
}

fn render_home(data: &SiteData) -> String {
    let config = &data.config;
    let mut out = String::new();

    // Hero
    out.push_str(&format!(
        r#"<section class="hero"><h1>{}</h1>"#,
        html_escape(&config.hero_title)
    ));
    if !config.hero_subtitle.trim().is_empty() {
        out.push_str(&format!("<p>{}</p>", html_escape(&config.hero_subtitle)));
    }
    if !config.hero_image.trim().is_empty() {
        out.push_str(&format!(
            r#"<img src="{}" alt="">"#,
            html_escape(&config.hero_image)
        ));
    }
    out.push_str(r#"<a class="cta" href="/shop">Lihat produk</a></section>"#);

    // Featured products
    let featured: Vec<&Product> = data.products.iter().filter(|p| p.featured).collect();
    if !featured.is_empty() {
        out.push_str(r#"<section><h2>Produk unggulan</h2><div class="grid">"#);
        for product in featured {
            out.push_str(&product_card(product));
        }
        out.push_str("</div></section>");
    }

    // About
    if !config.about_text.trim().is_empty() {
        out.push_str(r#"<section class="about"><div>"#);
        out.push_str(&format!("<h2>{}</h2>", html_escape(&config.about_title)));
        out.push_str(&format!(
            r#"<div class="prose">{}</div>"#,
            markdown(&config.about_text)
        ));
        out.push_str("</div>");
        out.push_str(&img_or_placeholder(&config.about_image, &config.about_title, "about-img"));
        out.push_str("</section>");
    }

    // Latest posts
    if !data.blogs.is_empty() {
        out.push_str(r#"<section><h2>Tulisan terbaru</h2><div class="posts">"#);
        for post in data.blogs.iter().take(3) {
            out.push_str(&format!(
                r#"<article><a href="/blog/{id}"><h3>{title}</h3></a><div class="meta">{date}</div><p>{excerpt}</p></article>"#,
                id = html_escape(&post.id),
                title = html_escape(&post.title),
                date = html_escape(&post.display_date()),
                excerpt = html_escape(&post.excerpt),
            ));
        }
        out.push_str("</div></section>");
    }

    out
}

fn render_shop(data: &SiteData, category: Option<&str>) -> String {
    let mut out = String::from("<h2>Shop</h2>");

    let categories = Product::categories(&data.products);
    if !categories.is_empty() {
        out.push_str(r#"<div class="filters">"#);
        let all_class = if category.is_none() { r#" class="active""# } else { "" };
        out.push_str(&format!(r#"<a href="/shop"{}>Semua</a>"#, all_class));
        for cat in &categories {
            let class = if category == Some(cat.as_str()) { r#" class="active""# } else { "" };
            out.push_str(&format!(
                r#"<a href="/shop?category={cat}"{class}>{cat_label}</a>"#,
                cat = html_escape(cat),
                class = class,
                cat_label = html_escape(cat),
            ));
        }
        out.push_str("</div>");
    }

    let visible: Vec<&Product> = data
        .products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect();

    if visible.is_empty() {
        out.push_str(r#"<p class="empty">Belum ada produk.</p>"#);
    } else {
        out.push_str(r#"<div class="grid">"#);
        for product in visible {
            out.push_str(&product_card(product));
        }
        out.push_str("</div>");
    }
    out
}

fn render_product_detail(product: &Product) -> String {
    format!(
        r#"<div class="detail">{img}<div><div class="category">{category}</div><h1>{name}</h1><div class="price">{price}</div><p>{description}</p><p><a href="/shop">&larr; Kembali ke shop</a></p></div></div>"#,
        img = img_or_placeholder(&product.image, &product.name, "photo"),
        category = html_escape(&product.category),
        name = html_escape(&product.name),
        price = format_price(product.price),
        description = html_escape(&product.description),
    )
}

fn render_blog(data: &SiteData) -> String {
    let mut out = String::from("<h2>Blog</h2>");
    if data.blogs.is_empty() {
        out.push_str(r#"<p class="empty">Belum ada tulisan.</p>"#);
        return out;
    }
    out.push_str(r#"<div class="posts">"#);
    for post in &data.blogs {
        out.push_str(&format!(
            r#"<article><a href="/blog/{id}"><h3>{title}</h3></a><div class="meta">{date}{author}</div><p>{excerpt}</p></article>"#,
            id = html_escape(&post.id),
            title = html_escape(&post.title),
            date = html_escape(&post.display_date()),
            author = if post.author.is_empty() {
                String::new()
            } else {
                format!(" · {}", html_escape(&post.author))
            },
            excerpt = html_escape(&post.excerpt),
        ));
    }
    out.push_str("</div>");
    out
}

fn render_blog_detail(post: &BlogPost) -> String {
    let cover = if post.image.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="cover" src="{}" alt="{}">"#,
            html_escape(&post.image),
            html_escape(&post.title)
        )
    };
    format!(
        r#"<article class="post"><h1>{title}</h1><div class="meta">{date}{author}</div>{cover}<div class="prose">{content}</div><p><a href="/blog">&larr; Semua tulisan</a></p></article>"#,
        title = html_escape(&post.title),
        date = html_escape(&post.display_date()),
        author = if post.author.is_empty() {
            String::new()
        } else {
            format!(" · {}", html_escape(&post.author))
        },
        cover = cover,
        content = markdown(&post.content),
    )
}

fn render_dynamic_page(page: &PageContent) -> String {
    format!(
        r#"<article class="post"><h1>{}</h1><div class="prose">{}</div></article>"#,
        html_escape(&page.title),
        markdown(&page.content),
    )
}

// ── Admin layout ────────────────────────────────────────

const ADMIN_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; }
:root { --bg: #f5f6f8; --panel: #ffffff; --text: #1f2937; --muted: #6b7280; --line: #e5e7eb; }
html[data-appearance="dark"] { --bg: #111827; --panel: #1f2937; --text: #e5e7eb;
  --muted: #9ca3af; --line: #374151; }
@media (prefers-color-scheme: dark) {
  html:not([data-appearance]) { --bg: #111827; --panel: #1f2937; --text: #e5e7eb;
    --muted: #9ca3af; --line: #374151; }
}
body { font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
a { color: rgb(var(--primary-500)); text-decoration: none; }
header.admin { display: flex; align-items: center; gap: 16px; padding: 14px 24px;
  background: var(--panel); border-bottom: 1px solid var(--line); }
header.admin .title { font-weight: 700; }
header.admin form { margin-left: auto; display: flex; gap: 8px; }
main { max-width: 1080px; margin: 0 auto; padding: 24px; }
nav.tabs { display: flex; gap: 8px; margin-bottom: 20px; }
nav.tabs a { padding: 8px 16px; border-radius: 8px; }
nav.tabs a.active { background: rgb(var(--primary-600)); color: #fff; }
.notice { padding: 12px 16px; border-radius: 8px; margin-bottom: 20px; }
.notice.success { background: rgb(var(--primary-100)); color: rgb(var(--primary-900)); }
.notice.error { background: #fee2e2; color: #991b1b; }
table { width: 100%; border-collapse: collapse; background: var(--panel); border-radius: 8px; }
th, td { text-align: left; padding: 10px 12px; border-bottom: 1px solid var(--line); }
th { color: var(--muted); font-size: 0.8rem; text-transform: uppercase; }
form.editor, form.settings { background: var(--panel); border: 1px solid var(--line);
  border-radius: 8px; padding: 20px; margin-top: 24px; display: grid; gap: 12px; }
label { display: grid; gap: 4px; font-size: 0.85rem; color: var(--muted); }
input[type=text], input[type=number], input[type=date], input[type=email], textarea {
  padding: 8px 10px; border: 1px solid var(--line); border-radius: 6px;
  background: var(--bg); color: var(--text); font: inherit; }
textarea { min-height: 120px; }
button { padding: 8px 18px; border: 0; border-radius: 6px; cursor: pointer;
  background: rgb(var(--primary-600)); color: #fff; font: inherit; }
button.danger { background: #dc2626; }
button.ghost { background: transparent; color: var(--muted); border: 1px solid var(--line); }
.login-wrap { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.login-card { background: var(--panel); border: 1px solid var(--line); border-radius: 10px;
  padding: 32px; width: 320px; display: grid; gap: 12px; }
.login-card h1 { font-size: 1.2rem; color: rgb(var(--primary-500)); }
.login-card .error { background: #fee2e2; color: #991b1b; padding: 10px 12px; border-radius: 6px; }
td.actions { white-space: nowrap; }
td.actions form { display: inline; }
"#;

fn admin_document(config: &SiteConfig, title: &str, appearance: &str, body: &str) -> String {
    let css_vars = theme::css_variables(&config.theme_color);
    let appearance_attr = match appearance {
        "dark" | "light" => format!(r#" data-appearance="{}""#, appearance),
        _ => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="id"{appearance_attr}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — {shop}</title>
<style>
{css_vars}
{css}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        appearance_attr = appearance_attr,
        title = html_escape(title),
        shop = html_escape(&config.shop_name),
        css_vars = css_vars,
        css = ADMIN_CSS,
        body = body,
    )
}

fn render_admin_login(
    config: &SiteConfig,
    error: Option<&str>,
    base: &str,
    appearance: &str,
) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<div class="error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };
    let body = format!(
        r#"<div class="login-wrap"><form class="login-card" method="post" action="{base}/login">
<h1>{shop}</h1>
{error}
<label>Password<input type="password" name="password" autofocus></label>
<button type="submit">Masuk</button>
</form></div>"#,
        base = base,
        shop = html_escape(&config.shop_name),
        error = error_html,
    );
    admin_document(config, "Login", appearance, &body)
}

// ── Admin dashboard ─────────────────────────────────────

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<input type="text" name="{name}" value="{value}"></label>"#,
        label = label,
        name = name,
        value = html_escape(value),
    )
}

fn textarea(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<textarea name="{name}">{value}</textarea></label>"#,
        label = label,
        name = name,
        value = html_escape(value),
    )
}

fn hidden_id(id: &str) -> String {
    format!(r#"<input type="hidden" name="id" value="{}">"#, html_escape(id))
}

fn delete_button(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}"><button class="danger" type="submit">Hapus</button></form>"#,
        action
    )
}

fn products_section(data: &SiteData, edit: Option<&str>, base: &str) -> String {
    let mut out = String::from(
        "<table><tr><th>Nama</th><th>Kategori</th><th>Harga</th><th>Unggulan</th><th></th></tr>",
    );
    for product in &data.products {
        out.push_str(&format!(
            r#"<tr><td>{name}</td><td>{category}</td><td>{price}</td><td>{featured}</td><td class="actions"><a href="{base}?tab=products&edit={id}">Edit</a> {delete}</td></tr>"#,
            name = html_escape(&product.name),
            category = html_escape(&product.category),
            price = format_price(product.price),
            featured = if product.featured { "✓" } else { "" },
            base = base,
            id = html_escape(&product.id),
            delete = delete_button(&format!("{}/products/{}/delete", base, html_escape(&product.id))),
        ));
    }
    out.push_str("</table>");

    let editing = edit.and_then(|id| data.product(id));
    let blank = Product::default();
    let current = editing.unwrap_or(&blank);
    let heading = if editing.is_some() { "Edit produk" } else { "Produk baru" };

    out.push_str(&format!(
        r#"<form class="editor" method="post" action="{base}/products"><h3>{heading}</h3>
{id}
{name}
{category}
<label>Harga<input type="number" name="price" min="0" step="any" value="{price}"></label>
{description}
{image}
<label>Unggulan<input type="checkbox" name="featured"{checked}></label>
<button type="submit">Simpan</button>
</form>"#,
        base = base,
        heading = heading,
        id = hidden_id(&current.id),
        name = text_input("Nama", "name", &current.name),
        category = text_input("Kategori", "category", &current.category),
        price = current.price,
        description = textarea("Deskripsi", "description", &current.description),
        image = text_input("URL gambar", "image", &current.image),
        checked = if current.featured { " checked" } else { "" },
    ));
    out
}

fn blogs_section(data: &SiteData, edit: Option<&str>, base: &str) -> String {
    let mut out =
        String::from("<table><tr><th>Judul</th><th>Tanggal</th><th>Penulis</th><th></th></tr>");
    for post in &data.blogs {
        out.push_str(&format!(
            r#"<tr><td>{title}</td><td>{date}</td><td>{author}</td><td class="actions"><a href="{base}?tab=blogs&edit={id}">Edit</a> {delete}</td></tr>"#,
            title = html_escape(&post.title),
            date = html_escape(&post.date),
            author = html_escape(&post.author),
            base = base,
            id = html_escape(&post.id),
            delete = delete_button(&format!("{}/blogs/{}/delete", base, html_escape(&post.id))),
        ));
    }
    out.push_str("</table>");

    let editing = edit.and_then(|id| data.blog(id));
    let blank = BlogPost::default();
    let current = editing.unwrap_or(&blank);
    let heading = if editing.is_some() { "Edit tulisan" } else { "Tulisan baru" };

    out.push_str(&format!(
        r#"<form class="editor" method="post" action="{base}/blogs"><h3>{heading}</h3>
{id}
{title}
{excerpt}
{content}
{author}
<label>Tanggal<input type="date" name="date" value="{date}"></label>
{image}
<button type="submit">Simpan</button>
</form>"#,
        base = base,
        heading = heading,
        id = hidden_id(&current.id),
        title = text_input("Judul", "title", &current.title),
        excerpt = textarea("Ringkasan", "excerpt", &current.excerpt),
        content = textarea("Isi (markdown)", "content", &current.content),
        author = text_input("Penulis", "author", &current.author),
        date = html_escape(&current.date),
        image = text_input("URL gambar", "image", &current.image),
    ));
    out
}

fn pages_section(data: &SiteData, edit: Option<&str>, base: &str) -> String {
    let mut out = String::from("<table><tr><th>Judul</th><th>Slug</th><th></th></tr>");
    for page in &data.pages {
        out.push_str(&format!(
            r#"<tr><td>{title}</td><td>/p/{slug}</td><td class="actions"><a href="{base}?tab=pages&edit={id}">Edit</a> {delete}</td></tr>"#,
            title = html_escape(&page.title),
            slug = html_escape(&page.slug),
            base = base,
            id = html_escape(&page.id),
            delete = delete_button(&format!("{}/pages/{}/delete", base, html_escape(&page.id))),
        ));
    }
    out.push_str("</table>");

    let editing = edit.and_then(|id| data.pages.iter().find(|p| p.id == id));
    let blank = PageContent::default();
    let current = editing.unwrap_or(&blank);
    let heading = if editing.is_some() { "Edit halaman" } else { "Halaman baru" };

    out.push_str(&format!(
        r#"<form class="editor" method="post" action="{base}/pages"><h3>{heading}</h3>
{id}
{title}
{slug}
{content}
<button type="submit">Simpan</button>
</form>"#,
        base = base,
        heading = heading,
        id = hidden_id(&current.id),
        title = text_input("Judul", "title", &current.title),
        slug = text_input("Slug (kosongkan untuk otomatis)", "slug", &current.slug),
        content = textarea("Isi (markdown)", "content", &current.content),
    ));
    out
}

fn settings_section(config: &SiteConfig, base: &str) -> String {
    format!(
        r#"<form class="settings" method="post" action="{base}/settings"><h3>Pengaturan toko</h3>
{shop_name}
{logo}
{theme_color}
{contact_email}
{contact_phone}
{contact_address}
{hero_title}
{hero_subtitle}
{hero_image}
{about_title}
{about_text}
{about_image}
{footer_text}
<button type="submit">Simpan pengaturan</button>
</form>"#,
        base = base,
        shop_name = text_input("Nama toko", "shop_name", &config.shop_name),
        logo = text_input("URL logo", "logo", &config.logo),
        theme_color = text_input("Warna tema (#RRGGBB)", "theme_color", &config.theme_color),
        contact_email = text_input("Email", "contact_email", &config.contact_email),
        contact_phone = text_input("Telepon", "contact_phone", &config.contact_phone),
        contact_address = text_input("Alamat", "contact_address", &config.contact_address),
        hero_title = text_input("Judul hero", "hero_title", &config.hero_title),
        hero_subtitle = text_input("Subjudul hero", "hero_subtitle", &config.hero_subtitle),
        hero_image = text_input("URL gambar hero", "hero_image", &config.hero_image),
        about_title = text_input("Judul tentang", "about_title", &config.about_title),
        about_text = textarea("Teks tentang (markdown)", "about_text", &config.about_text),
        about_image = text_input("URL gambar tentang", "about_image", &config.about_image),
        footer_text = text_input("Teks footer", "footer_text", &config.footer_text),
    )
}

fn render_admin_dashboard(
    data: &SiteData,
    tab: Tab,
    edit: Option<&str>,
    notice: &Option<Notice<'_>>,
    base: &str,
    appearance: &str,
) -> String {
    let mut tabs = String::new();
    for t in [Tab::Products, Tab::Blogs, Tab::Pages, Tab::Settings] {
        let label = match t {
            Tab::Products => "Produk",
            Tab::Blogs => "Blog",
            Tab::Pages => "Halaman",
            Tab::Settings => "Pengaturan",
        };
        let class = if t == tab { r#" class="active""# } else { "" };
        tabs.push_str(&format!(
            r#"<a href="{}?tab={}"{}>{}</a>"#,
            base,
            t.key(),
            class,
            label
        ));
    }

    let notice_html = match notice {
        Some(n) => format!(
            r#"<div class="notice {}">{}</div>"#,
            html_escape(n.kind),
            html_escape(n.message)
        ),
        None => String::new(),
    };

    let section = match tab {
        Tab::Products => products_section(data, edit, base),
        Tab::Blogs => blogs_section(data, edit, base),
        Tab::Pages => pages_section(data, edit, base),
        Tab::Settings => settings_section(&data.config, base),
    };

    let next_appearance = if appearance == "dark" { "light" } else { "dark" };
    let body = format!(
        r#"<header class="admin"><span class="title">{shop} — Dashboard</span><a href="/">Lihat situs</a>
<form method="post" action="{base}/appearance"><input type="hidden" name="value" value="{next}"><button class="ghost" type="submit">{toggle}</button></form>
<form method="get" action="{base}/logout"><button class="ghost" type="submit">Keluar</button></form>
</header>
<main>
<nav class="tabs">{tabs}</nav>
{notice}
{section}
</main>"#,
        shop = html_escape(&data.config.shop_name),
        base = base,
        next = next_appearance,
        toggle = if appearance == "dark" { "☀" } else { "☾" },
        tabs = tabs,
        notice = notice_html,
        section = section,
    );

    admin_document(&data.config, "Dashboard", appearance, &body)
}
