use std::path::PathBuf;

use serde::Serialize;

/// One import-path alias forwarded to the bundler's resolver, e.g. `@scss`
/// pointing at `<cwd>/src/assets/scss`.
#[derive(Debug, Clone, Serialize)]
pub struct AliasItem {
  pub find: String,
  pub replacement: PathBuf,
}

impl AliasItem {
  pub fn new(find: impl Into<String>, replacement: impl Into<PathBuf>) -> Self {
    Self { find: find.into(), replacement: replacement.into() }
  }
}
