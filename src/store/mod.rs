use thiserror::Error;

use crate::models::{BlogPost, PageContent, Product, SiteConfig};

pub mod memory;
pub mod remote;

/// Failure kinds for backend calls. Admin routes surface these to the
/// dashboard; public routes keep rendering from the last loaded state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend request failed: {0}")]
    Http(String),
    #[error("backend returned status {0}")]
    Backend(u16),
    #[error("could not decode backend response: {0}")]
    Decode(String),
}

/// Unified data-access trait over the external data service. Reads return
/// whole collections; saves are upserts keyed by id; `SiteConfig` is a
/// singleton overwritten wholesale.
///
/// Implementations: `RemoteStore` (JSON over HTTP) and `MemoryStore`
/// (in-process, for tests and local development).
pub trait DataStore: Send + Sync {
    fn products(&self) -> Result<Vec<Product>, StoreError>;
    fn blogs(&self) -> Result<Vec<BlogPost>, StoreError>;
    fn pages(&self) -> Result<Vec<PageContent>, StoreError>;
    fn site_config(&self) -> Result<SiteConfig, StoreError>;

    fn save_product(&self, product: &Product) -> Result<(), StoreError>;
    fn delete_product(&self, id: &str) -> Result<(), StoreError>;

    fn save_blog(&self, post: &BlogPost) -> Result<(), StoreError>;
    fn delete_blog(&self, id: &str) -> Result<(), StoreError>;

    fn save_page(&self, page: &PageContent) -> Result<(), StoreError>;
    fn delete_page(&self, id: &str) -> Result<(), StoreError>;

    fn save_site_config(&self, config: &SiteConfig) -> Result<(), StoreError>;
}
