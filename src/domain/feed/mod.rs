pub mod model;

pub use model::{Author, Feed, Item};
