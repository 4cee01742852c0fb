use std::path::PathBuf;

use pagepack_utils::path_ext::PathExt;
use serde::Serialize;

/// A discovered page file. The absolute path identifies the file on disk; the
/// path relative to the source root drives all naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFile {
  pub absolute_path: PathBuf,
  pub relative_path: PathBuf,
}

impl PageFile {
  pub fn new(absolute_path: PathBuf, relative_path: PathBuf) -> Self {
    Self { absolute_path, relative_path }
  }

  /// Logical entry name, a pure function of the relative path.
  pub fn entry_name(&self) -> String {
    self.relative_path.page_entry_name()
  }
}
