use serde::{Deserialize, Serialize};

/// A free-form content page routed by its slug (`/p/<slug>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
}
