pub mod option;
pub mod rfc822;
pub mod writer;

pub use option::SerializeOption;
pub use writer::{serialize, serialize_to_vec, ATOM_NAMESPACE, RSS_VERSION};
