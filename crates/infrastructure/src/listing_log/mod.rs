pub mod file;

pub use file::FileListingLog;
