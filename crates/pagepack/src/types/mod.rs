pub mod resolved_config;

use std::sync::Arc;

use pagepack_common::NormalizedBuildOptions;

pub type SharedOptions = Arc<NormalizedBuildOptions>;
