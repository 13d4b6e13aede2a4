use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{DataStore, StoreError};
use crate::models::{BlogPost, PageContent, Product, SiteConfig};

const API_KEY_HEADER: &str = "X-Api-Key";

/// `DataStore` over the managed data service: JSON collections at
/// `<base>/collections/<name>` and the singleton config at `<base>/config`.
///
/// The client carries no timeout and no retry; a stalled backend call
/// stalls the handler that issued it.
pub struct RemoteStore {
    client: Client,
    base: String,
    api_key: String,
}

impl RemoteStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        RemoteStore {
            client: Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            req
        } else {
            req.header(API_KEY_HEADER, &self.api_key)
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .authed(self.client.get(&url))
            .send()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Backend(resp.status().as_u16()));
        }
        resp.json::<T>().map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn put_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(), StoreError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .authed(self.client.put(&url))
            .json(body)
            .send()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Backend(resp.status().as_u16()));
        }
        Ok(())
    }

    fn delete_at(&self, path: &str) -> Result<(), StoreError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .authed(self.client.delete(&url))
            .send()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(StoreError::Backend(resp.status().as_u16()));
        }
        Ok(())
    }
}

impl DataStore for RemoteStore {
    fn products(&self) -> Result<Vec<Product>, StoreError> {
        self.get_json("/collections/products")
    }

    fn blogs(&self) -> Result<Vec<BlogPost>, StoreError> {
        self.get_json("/collections/blogs")
    }

    fn pages(&self) -> Result<Vec<PageContent>, StoreError> {
        self.get_json("/collections/pages")
    }

    fn site_config(&self) -> Result<SiteConfig, StoreError> {
        // A virgin backend stores no config yet: 404 and JSON null both
        // resolve to the default so the site can always render.
        let url = format!("{}/config", self.base);
        let resp = self
            .authed(self.client.get(&url))
            .send()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        if resp.status().as_u16() == 404 {
            return Ok(SiteConfig::default());
        }
        if !resp.status().is_success() {
            return Err(StoreError::Backend(resp.status().as_u16()));
        }
        let value: serde_json::Value = resp
            .json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        if value.is_null() {
            return Ok(SiteConfig::default());
        }
        serde_json::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn save_product(&self, product: &Product) -> Result<(), StoreError> {
        self.put_json(&format!("/collections/products/{}", product.id), product)
    }

    fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        self.delete_at(&format!("/collections/products/{}", id))
    }

    fn save_blog(&self, post: &BlogPost) -> Result<(), StoreError> {
        self.put_json(&format!("/collections/blogs/{}", post.id), post)
    }

    fn delete_blog(&self, id: &str) -> Result<(), StoreError> {
        self.delete_at(&format!("/collections/blogs/{}", id))
    }

    fn save_page(&self, page: &PageContent) -> Result<(), StoreError> {
        self.put_json(&format!("/collections/pages/{}", page.id), page)
    }

    fn delete_page(&self, id: &str) -> Result<(), StoreError> {
        self.delete_at(&format!("/collections/pages/{}", id))
    }

    fn save_site_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        self.put_json("/config", config)
    }
}
