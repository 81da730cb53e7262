//! Length-prefixed thumbnail reads.
//!
//! The thumbnail section is a big-endian u32 byte count followed by exactly
//! that many opaque bytes (the preview image in whatever encoding the writer
//! chose).  The declared size is bounded before any allocation happens, so a
//! hostile length field cannot request an arbitrarily large buffer.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};
use thiserror::Error;

/// Upper bound on the declared thumbnail size: 1 MiB.
/// A safety limit against corrupt or hostile length fields, not a format rule.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024 * 1024;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("declared thumbnail size {0} is out of range (1..={MAX_THUMBNAIL_SIZE} bytes)")]
    InvalidSize(u32),
    #[error("thumbnail data truncated (stream ended before the declared size)")]
    Truncated,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Read the thumbnail section from a stream positioned just after a
/// validated header.
///
/// On success the returned buffer holds exactly the declared number of
/// bytes, copied verbatim.  A stream that ends inside the length field or
/// inside the payload fails with [`ThumbnailError::Truncated`]; the partial
/// buffer is dropped, never returned.
pub fn read_thumbnail<R: Read>(mut reader: R) -> Result<Vec<u8>, ThumbnailError> {
    let declared = reader.read_u32::<BigEndian>().map_err(eof_as_truncated)?;
    if declared == 0 || declared > MAX_THUMBNAIL_SIZE {
        return Err(ThumbnailError::InvalidSize(declared));
    }

    let mut blob = vec![0u8; declared as usize];
    reader.read_exact(&mut blob).map_err(eof_as_truncated)?;
    Ok(blob)
}

fn eof_as_truncated(e: io::Error) -> ThumbnailError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        ThumbnailError::Truncated
    } else {
        ThumbnailError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn section(declared: u32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = declared.to_be_bytes().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn reads_exactly_declared_bytes() {
        let bytes = section(3, &[0xAA, 0xBB, 0xCC, 0xDD]);
        let blob = read_thumbnail(Cursor::new(bytes)).unwrap();
        assert_eq!(blob, vec![0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn zero_size_rejected() {
        let err = read_thumbnail(Cursor::new(section(0, &[]))).unwrap_err();
        assert!(matches!(err, ThumbnailError::InvalidSize(0)));
    }

    #[test]
    fn oversize_rejected_before_allocation() {
        let err = read_thumbnail(Cursor::new(section(MAX_THUMBNAIL_SIZE + 1, &[]))).unwrap_err();
        assert!(matches!(err, ThumbnailError::InvalidSize(_)));
    }

    #[test]
    fn short_payload_is_truncated() {
        let err = read_thumbnail(Cursor::new(section(10, &[1, 2, 3]))).unwrap_err();
        assert!(matches!(err, ThumbnailError::Truncated));
    }

    #[test]
    fn short_length_field_is_truncated() {
        // Only two of the four length bytes present.
        let err = read_thumbnail(Cursor::new(vec![0x00, 0x00])).unwrap_err();
        assert!(matches!(err, ThumbnailError::Truncated));
    }

    #[test]
    fn max_size_accepted() {
        let payload = vec![0x5A; MAX_THUMBNAIL_SIZE as usize];
        let blob = read_thumbnail(Cursor::new(section(MAX_THUMBNAIL_SIZE, &payload))).unwrap();
        assert_eq!(blob.len(), MAX_THUMBNAIL_SIZE as usize);
    }
}
