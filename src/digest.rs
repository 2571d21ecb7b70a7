//! File content digests using BLAKE3.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// 256-bit BLAKE3 output, used as a stand-in for byte equality.
pub type Digest = [u8; 32];

/// Read buffer size for streaming digests.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the content digest of a file.
///
/// Streams the file through the hasher in fixed-size chunks so large files
/// never have to fit in memory.
pub fn file_digest(path: &Path) -> io::Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(*hasher.finalize().as_bytes())
}

/// Compare two files by content digest.
///
/// Any file that cannot be opened or read counts as "not identical", so the
/// caller copies instead of failing; a missing comparison target lands here
/// too.
pub fn files_identical(a: &Path, b: &Path) -> bool {
    match (file_digest(a), file_digest(b)) {
        (Ok(digest_a), Ok(digest_b)) => {
            trace!(
                left = %hex::encode(digest_a),
                right = %hex::encode(digest_b),
                "Compared content digests"
            );
            digest_a == digest_b
        }
        _ => false,
    }
}
