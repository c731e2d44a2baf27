//! Atomic file copy implementation

use crate::types::MirrorError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::Builder;

/// Suffix of in-flight copies
pub const PART_SUFFIX: &str = ".part";

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Write to a hidden temporary sibling of `dest` (`.<random>.part`)
/// 2. Flush and sync to disk
/// 3. Stamp it with the source's modification time
/// 4. Rename over `dest`, replacing any existing file
///
/// The temporary name is random and created exclusively, so it never
/// clobbers a real file that happens to sit next to `dest`.
///
/// Carrying the modification time over is what lets the next pass see the
/// copy as up to date. Permissions are not carried over.
///
/// The parent of `dest` must already exist. On failure the temporary file is
/// removed and `dest` is left as it was.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(MirrorError)` - IO error or other failure
///
/// # Example
/// ```no_run
/// use dirmirror::executor::copy_file_atomic;
/// use std::path::Path;
///
/// let bytes = copy_file_atomic(Path::new("source.txt"), Path::new("dest.txt"))?;
/// # Ok::<(), dirmirror::types::MirrorError>(())
/// ```
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, MirrorError> {
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut src_file = File::open(src).map_err(MirrorError::at("open", src))?;

    // Removed on drop unless persisted
    let mut part = Builder::new()
        .prefix(".")
        .suffix(PART_SUFFIX)
        .tempfile_in(parent)
        .map_err(MirrorError::at("create temporary file in", parent))?;

    // 128KB buffer
    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file
            .read(&mut buffer)
            .map_err(MirrorError::at("read", src))?;

        if bytes_read == 0 {
            break;
        }

        part.write_all(&buffer[..bytes_read])
            .map_err(MirrorError::at("write", dest))?;
        total_bytes += bytes_read as u64;
    }

    part.as_file()
        .sync_all()
        .map_err(MirrorError::at("flush", dest))?;

    let mtime = src_file
        .metadata()
        .and_then(|metadata| metadata.modified())
        .map_err(MirrorError::at("read modification time of", src))?;
    filetime::set_file_handle_times(
        part.as_file(),
        None,
        Some(filetime::FileTime::from_system_time(mtime)),
    )
    .map_err(MirrorError::at("set modification time of", dest))?;

    part.persist(dest)
        .map_err(|err| MirrorError::fs("replace", dest, err.error))?;

    Ok(total_bytes)
}
