pub mod indexmap;
pub mod path_ext;
pub mod sanitize_file_name;
pub mod version_stamp;
