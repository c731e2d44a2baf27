//! FileEntry and DirListing - one level of a live directory listing

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::time::SystemTime;

/// A regular file seen in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name within its directory
    pub name: OsString,

    /// Full path of the file
    pub path: PathBuf,

    /// Last modification time
    pub modified: SystemTime,
}

impl FileEntry {
    /// Create a new FileEntry for `path`
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        Self {
            name,
            path,
            modified,
        }
    }

    /// Check if this file was modified strictly later than `other`
    pub fn is_newer_than(&self, other: &FileEntry) -> bool {
        self.modified > other.modified
    }
}

/// Immediate children of one directory, split into files and subdirectories.
///
/// Both collections are ordered by name so a pass visits entries in the same
/// order every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    /// Directory that was listed
    pub root: PathBuf,

    /// Files keyed by name
    pub files: BTreeMap<OsString, FileEntry>,

    /// Subdirectory names
    pub dirs: BTreeSet<OsString>,
}

impl DirListing {
    /// Create an empty listing for `root`
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            files: BTreeMap::new(),
            dirs: BTreeSet::new(),
        }
    }

    /// Add a file entry, keyed by its name
    pub fn insert_file(&mut self, entry: FileEntry) {
        self.files.insert(entry.name.clone(), entry);
    }

    /// Add a subdirectory name
    pub fn insert_dir(&mut self, name: OsString) {
        self.dirs.insert(name);
    }

    /// Look up a file by name
    pub fn file(&self, name: &OsStr) -> Option<&FileEntry> {
        self.files.get(name)
    }

    /// Check if a subdirectory with this name exists
    pub fn has_dir(&self, name: &OsStr) -> bool {
        self.dirs.contains(name)
    }

    /// Full path of a child of the listed directory
    pub fn child_path(&self, name: &OsStr) -> PathBuf {
        self.root.join(name)
    }
}

/// A source/destination directory pair, the unit of recursive comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl SyncPair {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Pair for the same-named subdirectory on both sides
    pub fn child(&self, name: &OsStr) -> SyncPair {
        SyncPair {
            source: self.source.join(name),
            destination: self.destination.join(name),
        }
    }
}
