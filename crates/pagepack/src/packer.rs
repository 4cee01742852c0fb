use std::sync::Arc;

use pagepack_common::BuildOptions;
use pagepack_error::BuildResult;
use pagepack_fs::OsFileSystem;

use crate::{
  stages::{generate::GenerateStage, scan::ScanStage},
  types::{SharedOptions, resolved_config::ResolveOutput},
  utils::{load_env::load_env, normalize_options::normalize_options},
};

/// Entry discovery and output naming for one build invocation. Construction
/// normalizes the options; [`Packer::resolve`] performs the one-shot
/// synchronous startup computation and hands back the configuration the
/// external bundler consumes.
pub struct Packer {
  fs: OsFileSystem,
  options: SharedOptions,
}

impl Packer {
  pub fn new(options: BuildOptions) -> Self {
    let options = normalize_options(options);
    Packer { fs: OsFileSystem, options: Arc::new(options) }
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  pub fn resolve(&self) -> BuildResult<ResolveOutput> {
    let environment = load_env(&self.fs, &self.options)?;
    let scan_output = ScanStage::new(self.fs, Arc::clone(&self.options)).scan()?;
    Ok(GenerateStage::new(Arc::clone(&self.options)).generate(scan_output, environment))
  }
}
