//! One-level directory listing

use crate::types::{DirListing, FileEntry, MirrorError};
use std::fs;
use std::path::Path;

/// List the immediate files and subdirectories of `dir`
///
/// Only one level is read; recursion is the reconciler's job.
///
/// Entries are classified by following links, so a link to a file is listed
/// as a file and a link to a directory as a directory. Dangling links and
/// special files (pipes, sockets, devices) are left out. Since they never
/// show up in a destination listing either, they are never deleted as
/// strays.
///
/// # Errors
/// Any failure to read the directory itself or an entry's metadata is
/// returned as `MirrorError`; nothing is skipped silently except the cases
/// above.
pub fn list_dir(dir: &Path) -> Result<DirListing, MirrorError> {
    let mut listing = DirListing::new(dir.to_path_buf());

    let entries = fs::read_dir(dir).map_err(MirrorError::at("list", dir))?;

    for entry in entries {
        let entry = entry.map_err(MirrorError::at("list", dir))?;
        let path = entry.path();

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Dangling link, or removed while listing
                continue;
            }
            Err(e) => return Err(MirrorError::fs("read metadata of", &path, e)),
        };

        if metadata.is_dir() {
            listing.insert_dir(entry.file_name());
        } else if metadata.is_file() {
            let modified = metadata
                .modified()
                .map_err(MirrorError::at("read modification time of", &path))?;
            listing.insert_file(FileEntry::new(path, modified));
        }
    }

    Ok(listing)
}
