// Utility modules for shared functionality
pub mod fs;
pub mod path;

pub use fs::{archive_file, atomic_write, dump_json, ensure_dir, file_exists, load_json};
pub use path::{add_suffix, has_suffix, join_paths, normalize_path};
