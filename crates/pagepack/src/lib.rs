mod packer;
mod stages;
mod types;
mod utils;

pub use crate::{
  packer::Packer,
  types::{
    SharedOptions,
    resolved_config::{ResolveOutput, ResolvedConfig},
  },
};
pub use pagepack_common::*;
