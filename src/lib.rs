pub mod extract;
pub mod header;
pub mod thumbnail;

pub use extract::{extract_thumbnail, ExtractError};
pub use header::{HeaderError, PxcHeader, MAGIC, THUMBNAIL_MIN_VERSION};
pub use thumbnail::{read_thumbnail, ThumbnailError, MAX_THUMBNAIL_SIZE};
