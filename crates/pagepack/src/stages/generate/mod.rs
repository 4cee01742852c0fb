use std::sync::Arc;

use pagepack_common::{
  Environment, FilenameTemplate, NormalizedServerOptions, OutputAsset, OutputKind, OutputNaming,
};
use pagepack_utils::version_stamp::today_stamp;

use crate::{
  stages::scan::ScanStageOutput,
  types::{
    SharedOptions,
    resolved_config::{ResolveOutput, ResolvedConfig},
  },
};

pub struct GenerateStage {
  options: SharedOptions,
}

impl GenerateStage {
  pub fn new(options: SharedOptions) -> Self {
    Self { options }
  }

  /// Assembles the final configuration: the version stamp is fixed here, one
  /// output is planned per entry, and the dev-server block is resolved
  /// against the environment.
  pub fn generate(&self, scan: ScanStageOutput, environment: Environment) -> ResolveOutput {
    let ScanStageOutput { entries, warnings } = scan;

    let naming = OutputNaming::new(
      today_stamp(),
      FilenameTemplate::new(self.options.entry_filenames.clone()),
      FilenameTemplate::new(self.options.chunk_filenames.clone()),
      FilenameTemplate::new(self.options.asset_filenames.clone()),
    );

    let assets = entries
      .iter()
      .map(|(name, page)| OutputAsset {
        name: name.clone(),
        kind: OutputKind::EntryScript,
        filename: naming.entry_filename(&page.relative_path),
      })
      .collect();

    let server = NormalizedServerOptions {
      open: self.options.server.open,
      host: self.options.server.host,
      port: self
        .options
        .server
        .port
        .clone()
        .or_else(|| environment.get("PORT").map(str::to_string)),
    };

    let config = ResolvedConfig {
      entries,
      assets,
      naming,
      server,
      environment,
      options: Arc::clone(&self.options),
    };

    ResolveOutput { config, warnings }
  }
}
