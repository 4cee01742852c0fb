pub mod alias_item;
pub mod css_options;
pub mod filename_template;
pub mod normalized_build_options;
pub mod server_options;

use std::path::PathBuf;

use crate::{AliasItem, CssOptions, ServerOptions};

/// Raw, user-facing options. Every field is optional; defaults are filled in
/// by option normalization before anything else runs.
#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub src_dir: Option<String>,
  pub public_dir: Option<String>,
  pub page_extension: Option<String>,
  pub env_file: Option<PathBuf>,

  // --- Output
  pub out_dir: Option<String>,
  pub base: Option<String>,
  pub empty_out_dir: Option<bool>,
  pub entry_filenames: Option<String>,
  pub chunk_filenames: Option<String>,
  pub asset_filenames: Option<String>,
  pub chunk_size_warning_limit: Option<u64>,
  pub module_preload_polyfill: Option<bool>,

  // --- Transform
  pub css: Option<CssOptions>,
  pub alias: Option<Vec<AliasItem>>,
  pub drop: Option<Vec<String>>,

  // --- Server
  pub server: Option<ServerOptions>,
}
