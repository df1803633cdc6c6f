pub mod blob;

pub use blob::{BlobGenerator, ContentBlob};
