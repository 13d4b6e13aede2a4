use serde::{Deserialize, Serialize};

use crate::theme;

/// The singleton site configuration. Exactly one instance lives in the
/// backend and it is overwritten wholesale on every admin save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
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

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            shop_name: "Etalase".to_string(),
            logo: String::new(),
            theme_color: theme::DEFAULT_THEME_COLOR.to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
            contact_address: String::new(),
            hero_title: "Selamat datang".to_string(),
            hero_subtitle: String::new(),
            hero_image: String::new(),
            about_title: "Tentang kami".to_string(),
            about_text: String::new(),
            about_image: String::new(),
            footer_text: String::new(),
        }
    }
}
