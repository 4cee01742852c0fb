mod build_options;
mod types;

pub use build_options::{
  BuildOptions,
  alias_item::AliasItem,
  css_options::{CssOptions, NormalizedCssOptions},
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  normalized_build_options::NormalizedBuildOptions,
  server_options::{NormalizedServerOptions, ServerOptions},
};

pub use crate::types::{
  entry_map::EntryMap, environment::Environment, output_asset::OutputAsset,
  output_kind::OutputKind, output_naming::OutputNaming, page_file::PageFile,
};
