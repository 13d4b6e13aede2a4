use std::sync::{RwLock, RwLockReadGuard};

use crate::models::{BlogPost, PageContent, Product, SiteConfig};
use crate::store::{DataStore, StoreError};

/// Everything the renderers consume: the four collections, loaded wholesale
/// from the backend. Mutated only by swapping the entire value.
pub struct SiteData {
    pub products: Vec<Product>,
    pub blogs: Vec<BlogPost>,
    pub pages: Vec<PageContent>,
    pub config: SiteConfig,
}

impl SiteData {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn blog(&self, id: &str) -> Option<&BlogPost> {
        self.blogs.iter().find(|b| b.id == id)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Stable display order: products by name, blogs newest first, pages by
    /// title. The backend imposes no order of its own.
    fn normalize(&mut self) {
        self.products
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        self.blogs
            .sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
        self.pages.sort_by(|a, b| a.title.cmp(&b.title));
    }
}

/// The single in-memory application state, managed by Rocket. Requests take
/// the read lock; admin mutations reload and swap under the write lock.
pub struct AppState {
    data: RwLock<SiteData>,
}

impl AppState {
    /// Initial load. All four fetches must resolve before the state exists;
    /// the caller (launch) aborts otherwise.
    pub fn load(store: &dyn DataStore) -> Result<AppState, StoreError> {
        let data = fetch_all(store)?;
        Ok(AppState {
            data: RwLock::new(data),
        })
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SiteData> {
        self.data.read().unwrap()
    }

    /// Full refetch of all four collections, replacing the state wholesale.
    /// On failure the previous data is kept and the error goes back to the
    /// caller for display.
    pub fn reload(&self, store: &dyn DataStore) -> Result<(), StoreError> {
        let fresh = fetch_all(store)?;
        *self.data.write().unwrap() = fresh;
        Ok(())
    }
}

/// The four collection reads, issued concurrently. No partial result is
/// ever exposed: one failure fails the whole fetch.
fn fetch_all(store: &dyn DataStore) -> Result<SiteData, StoreError> {
    let (products, blogs, pages, config) = std::thread::scope(|s| {
        let products = s.spawn(|| store.products());
        let blogs = s.spawn(|| store.blogs());
        let pages = s.spawn(|| store.pages());
        let config = s.spawn(|| store.site_config());
        (
            products.join().expect("products fetch panicked"),
            blogs.join().expect("blogs fetch panicked"),
            pages.join().expect("pages fetch panicked"),
            config.join().expect("config fetch panicked"),
        )
    });

    let mut data = SiteData {
        products: products?,
        blogs: blogs?,
        pages: pages?,
        config: config?,
    };
    data.normalize();
    Ok(data)
}
