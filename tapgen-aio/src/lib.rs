// tapgen-aio/src/lib.rs
//! IO primitives for tapgen (filesystem, json, checksums)

// Declare modules
pub mod checksum;
pub mod fs;
pub mod json_io;

// Re-export the primary functions
pub use checksum::sha256_hex;
pub use fs::{atomic_write_file, create_dir_all, read_to_string};
pub use json_io::{read_json, write_json};
