use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::serializer::{self, SerializeOption};
use crate::error::SyndicationResult;

/// Person credited for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A single entry of a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    /// Raw HTML; escaped when written out
    #[serde(default)]
    pub body: String,
    pub link: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    pub publish_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Url>,
}

impl Item {
    /// Creates an item published now, with an empty body and no optional fields
    pub fn new(title: impl Into<String>, link: Url) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            link,
            permalink: None,
            publish_date: Utc::now(),
            author: None,
            categories: Vec::new(),
            comments: None,
        }
    }

    /// Appends a category; duplicates are kept in insertion order
    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }

    /// Identifier written to `<guid>`: the permalink if set, otherwise the link
    pub fn guid(&self) -> &str {
        match self.permalink.as_deref() {
            Some(permalink) if !permalink.is_empty() => permalink,
            _ => self.link.as_str(),
        }
    }
}

/// Top-level syndication document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub link: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Feed {
    pub fn new(title: impl Into<String>, description: impl Into<String>, link: Url) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link,
            copyright: None,
            language: None,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Serializes this feed to an RSS 2.0 document
    pub fn serialize(&self, options: &SerializeOption) -> SyndicationResult<String> {
        serializer::serialize(self, options)
    }
}
