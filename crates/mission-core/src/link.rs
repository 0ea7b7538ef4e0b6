use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked link. `title` is either fetched from the target page or
/// supplied by the caller; it falls back to the URL itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: u64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    pub fn new(id: u64, url: String, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            title,
            description: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shallow-merge patch for a link
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl LinkPatch {
    pub fn apply(self, link: &mut Link, now: DateTime<Utc>) {
        if let Some(url) = self.url {
            link.url = url;
        }
        if let Some(title) = self.title {
            link.title = title;
        }
        if let Some(description) = self.description {
            link.description = description;
        }
        if let Some(tags) = self.tags {
            link.tags = tags;
        }
        link.updated_at = now;
    }
}
