use pagepack_common::{EntryMap, Environment, NormalizedServerOptions, OutputAsset, OutputNaming};
use serde::Serialize;

use crate::types::SharedOptions;

/// The mapping object handed to the external bundler: entry points, planned
/// entry outputs, the naming callbacks, the resolved dev-server block, and
/// the opaque environment. Derived once per invocation, never persisted.
#[derive(Debug, Serialize)]
pub struct ResolvedConfig {
  pub entries: EntryMap,
  pub assets: Vec<OutputAsset>,
  pub naming: OutputNaming,
  pub server: NormalizedServerOptions,
  pub environment: Environment,
  pub options: SharedOptions,
}

#[derive(Debug)]
pub struct ResolveOutput {
  pub config: ResolvedConfig,
  pub warnings: Vec<anyhow::Error>,
}
