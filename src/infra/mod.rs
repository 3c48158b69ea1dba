//! File I/O for the source tree

mod fs;

pub use fs::{FsError, SourceListing, read_text, scan_source_directory};
