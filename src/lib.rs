//! RSS 2.0 feed model and serializer.
//!
//! Build a [`Feed`], push [`Item`]s onto it and call [`serialize`] to get a
//! complete XML document with an Atom self-link:
//!
//! ```
//! use rss_syndication::{serialize, Author, Feed, Item, SerializeOption};
//! use url::Url;
//!
//! let mut feed = Feed::new(
//!     "Example Blog",
//!     "Notes and rants",
//!     Url::parse("https://example.com/feed").unwrap(),
//! );
//! let mut item = Item::new("Hello", Url::parse("https://example.com/hello").unwrap());
//! item.body = "<p>Hello, world</p>".to_string();
//! item.author = Some(Author::new("Jane Doe").with_email("jane@example.com"));
//! feed.add_item(item);
//!
//! let xml = serialize(&feed, &SerializeOption::default()).unwrap();
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
//! assert!(xml.contains("&lt;p&gt;Hello, world&lt;/p&gt;"));
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::feed::{Author, Feed, Item};
pub use domain::serializer::{
    rfc822, serialize, serialize_to_vec, SerializeOption, ATOM_NAMESPACE, RSS_VERSION,
};
pub use error::{SyndicationError, SyndicationResult};
