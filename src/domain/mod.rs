pub mod feed;
pub mod serializer;
