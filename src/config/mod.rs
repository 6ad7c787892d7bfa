pub mod loader;
pub mod schema;

pub use loader::{load_file_list, load_from_path, load_from_str, ConfigError};
pub use schema::{Input, Manifest, Metadata, ValidationError, ValidationIssue};
