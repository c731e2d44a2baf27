//! File comparison logic

use crate::types::{CopyReason, FileEntry};

/// Decide whether a source file must be copied over its destination
///
/// Metadata-only comparison:
///
/// 1. **Missing**: no same-named destination file → copy
/// 2. **Modification time**:
///    - Source newer (src.modified > dest.modified) → copy
///    - Same time → up to date, no copy
///    - Destination newer → no copy (the destination is never rolled back)
///
/// Sizes and contents are not looked at; a file edited without its
/// modification time moving forward is not detected.
pub fn compare_files(src: &FileEntry, dest: Option<&FileEntry>) -> Option<CopyReason> {
    match dest {
        None => Some(CopyReason::Missing),
        Some(dest) if src.is_newer_than(dest) => Some(CopyReason::Newer),
        Some(_) => None,
    }
}
