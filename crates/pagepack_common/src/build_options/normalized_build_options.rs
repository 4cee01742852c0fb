use std::path::PathBuf;

use serde::Serialize;

use crate::{AliasItem, NormalizedCssOptions, NormalizedServerOptions};

/// Options after defaulting, with every path anchored at `cwd`. Read-only for
/// the remainder of the invocation.
#[derive(Debug, Serialize)]
pub struct NormalizedBuildOptions {
  // --- Input
  pub cwd: PathBuf,
  pub src_dir: PathBuf,
  pub public_dir: PathBuf,
  /// Page-file extension without the leading dot, matched case-sensitively.
  pub page_extension: String,
  pub env_file: PathBuf,

  // --- Output
  pub out_dir: PathBuf,
  pub base: String,
  pub empty_out_dir: bool,
  pub entry_filenames: String,
  pub chunk_filenames: String,
  pub asset_filenames: String,
  pub chunk_size_warning_limit: u64,
  pub module_preload_polyfill: bool,

  // --- Transform
  pub css: NormalizedCssOptions,
  pub alias: Vec<AliasItem>,
  pub drop: Vec<String>,

  // --- Server
  pub server: NormalizedServerOptions,
}
