use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog entry. `content` is markdown, rendered to HTML at display time.
/// `date` is an ISO `YYYY-MM-DD` string as the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub image: String,
}

impl BlogPost {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Human display date; falls back to the raw string when it isn't ISO.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(d) => d.format("%d %B %Y").to_string(),
            None => self.date.clone(),
        }
    }
}
