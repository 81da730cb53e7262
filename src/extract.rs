//! High-level extraction pipeline — the primary embedding surface.
//!
//! ```no_run
//! let written = pxc_thumb::extract_thumbnail(
//!     "drawing.pxc".as_ref(),
//!     "drawing-thumb.png".as_ref(),
//! )?;
//! println!("{written} bytes");
//! # Ok::<(), pxc_thumb::ExtractError>(())
//! ```
//!
//! The pipeline is strictly linear: open the input, validate the header,
//! read the blob fully into memory, then write it out.  The output file is
//! created only once the whole blob has been read, so no read-side failure
//! can touch the destination path.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::header::{HeaderError, PxcHeader};
use crate::thumbnail::{read_thumbnail, ThumbnailError};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot open {path}: {source}")]
    InputOpen { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Header(#[from] HeaderError),
    #[error("{0}")]
    Thumbnail(#[from] ThumbnailError),
    #[error("cannot create {path}: {source}")]
    OutputCreate { path: PathBuf, source: io::Error },
    #[error("writing {path} failed: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Extract the embedded thumbnail from the .pxc file at `input` and write
/// it verbatim to `output`, creating or overwriting that file.
///
/// Returns the number of bytes written.  On any failure the destination is
/// either untouched (read-side errors) or removed (write-side errors), so a
/// failed run never leaves a partial thumbnail behind.
pub fn extract_thumbnail(input: &Path, output: &Path) -> Result<usize, ExtractError> {
    let file = File::open(input).map_err(|e| ExtractError::InputOpen {
        path: input.to_owned(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    PxcHeader::read(&mut reader)?;
    let blob = read_thumbnail(&mut reader)?;

    write_blob(output, &blob)?;
    Ok(blob.len())
}

/// Write the blob to `path` in one operation, truncating any existing file.
/// A short or failed write removes the file before reporting the error.
fn write_blob(path: &Path, blob: &[u8]) -> Result<(), ExtractError> {
    let mut file = File::create(path).map_err(|e| ExtractError::OutputCreate {
        path: path.to_owned(),
        source: e,
    })?;

    if let Err(e) = file.write_all(blob) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(ExtractError::Write {
            path: path.to_owned(),
            source: e,
        });
    }
    Ok(())
}
