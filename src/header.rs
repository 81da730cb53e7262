use byteorder::ReadBytesExt;
use std::io::{self, Read};
use thiserror::Error;

/// Identification bytes at the start of every .pxc file.
pub const MAGIC: [u8; 2] = [0xAB, 0xC4];

/// First format version that carries an embedded thumbnail section.
/// Older versions are well-formed containers but have nothing to extract.
pub const THUMBNAIL_MIN_VERSION: u8 = 4;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("not a pxc file (magic bytes {found:02x?}, expected {MAGIC:02x?})")]
    InvalidMagic { found: [u8; 2] },
    #[error("stream ends inside the pxc header")]
    Truncated,
    #[error("pxc version {0} has no embedded thumbnail (version {THUMBNAIL_MIN_VERSION} or later required)")]
    UnsupportedVersion(u8),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The fixed 3-byte prologue of a .pxc container.
#[derive(Debug, Clone, Copy)]
pub struct PxcHeader {
    pub version: u8,
}

impl PxcHeader {
    /// Read and validate the container prologue, leaving the reader
    /// positioned at the thumbnail length field.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, HeaderError> {
        let mut magic = [0u8; 2];
        match reader.read_exact(&mut magic) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(HeaderError::Truncated);
            }
            Err(e) => return Err(HeaderError::Io(e)),
        }
        if magic != MAGIC {
            return Err(HeaderError::InvalidMagic { found: magic });
        }

        let version = match reader.read_u8() {
            Ok(v) => v,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(HeaderError::Truncated);
            }
            Err(e) => return Err(HeaderError::Io(e)),
        };
        if version < THUMBNAIL_MIN_VERSION {
            return Err(HeaderError::UnsupportedVersion(version));
        }

        Ok(Self { version })
    }
}
