//! Directory scanning logic

mod listing;

pub use listing::list_dir;
