use std::sync::Mutex;

use super::{DataStore, StoreError};
use crate::models::{BlogPost, PageContent, Product, SiteConfig};

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    blogs: Vec<BlogPost>,
    pages: Vec<PageContent>,
    config: Option<SiteConfig>,
}

/// In-process `DataStore` with the same upsert/delete semantics as the
/// backend. Used by the test suite and by `backend.url = "memory"` runs.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

fn upsert_by<T: Clone>(items: &mut Vec<T>, item: &T, same_id: impl Fn(&T) -> bool) {
    match items.iter().position(|existing| same_id(existing)) {
        Some(i) => items[i] = item.clone(),
        None => items.push(item.clone()),
    }
}

impl DataStore for MemoryStore {
    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.lock().unwrap().products.clone())
    }

    fn blogs(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.inner.lock().unwrap().blogs.clone())
    }

    fn pages(&self) -> Result<Vec<PageContent>, StoreError> {
        Ok(self.inner.lock().unwrap().pages.clone())
    }

    fn site_config(&self) -> Result<SiteConfig, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .config
            .clone()
            .unwrap_or_default())
    }

    fn save_product(&self, product: &Product) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        upsert_by(&mut inner.products, product, |p| p.id == product.id);
        Ok(())
    }

    fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().unwrap().products.retain(|p| p.id != id);
        Ok(())
    }

    fn save_blog(&self, post: &BlogPost) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        upsert_by(&mut inner.blogs, post, |b| b.id == post.id);
        Ok(())
    }

    fn delete_blog(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().unwrap().blogs.retain(|b| b.id != id);
        Ok(())
    }

    fn save_page(&self, page: &PageContent) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        upsert_by(&mut inner.pages, page, |p| p.id == page.id);
        Ok(())
    }

    fn delete_page(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().unwrap().pages.retain(|p| p.id != id);
        Ok(())
    }

    fn save_site_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        self.inner.lock().unwrap().config = Some(config.clone());
        Ok(())
    }
}
