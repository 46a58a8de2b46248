pub mod paths;

pub use paths::{blat_override, config_path, describe_paths, readmap_home, workspace_dir};
