use crate::models::{BlogPost, PageContent, Product};

/// Which page renderer is active. One variant per page; detail variants
/// carry their selection, so a detail view cannot exist without one
/// (routes fall back to the matching list view instead).
pub enum View<'a> {
    Home,
    Shop {
        category: Option<&'a str>,
    },
    ProductDetail(&'a Product),
    Blog,
    BlogDetail(&'a BlogPost),
    DynamicPage(&'a PageContent),
    AdminLogin {
        error: Option<&'a str>,
        base: &'a str,
        appearance: &'a str,
    },
    AdminDashboard {
        tab: Tab,
        edit: Option<&'a str>,
        notice: Option<Notice<'a>>,
        base: &'a str,
        appearance: &'a str,
    },
}

/// Active section of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Products,
    Blogs,
    Pages,
    Settings,
}

impl Tab {
    pub fn from_query(value: Option<&str>) -> Tab {
        match value {
            Some("blogs") => Tab::Blogs,
            Some("pages") => Tab::Pages,
            Some("settings") => Tab::Settings,
            _ => Tab::Products,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Products => "products",
            Tab::Blogs => "blogs",
            Tab::Pages => "pages",
            Tab::Settings => "settings",
        }
    }
}

/// A one-shot dashboard banner, carried over a redirect as a flash message.
/// `kind` is "success" or "error".
pub struct Notice<'a> {
    pub kind: &'a str,
    pub message: &'a str,
}
