use std::path::Path;

use pagepack_utils::{
  path_ext::{INDEX_NAME, PathExt},
  sanitize_file_name::sanitize_file_name,
};
use serde::Serialize;

use crate::{FileNameRenderOptions, FilenameTemplate};

/// Deterministic output naming for one build invocation. The version stamp is
/// fixed up front; the three functions here are what gets handed to the
/// bundler as its entry, chunk and asset file-name callbacks.
#[derive(Debug, Clone, Serialize)]
pub struct OutputNaming {
  stamp: String,
  entry_filenames: FilenameTemplate,
  chunk_filenames: FilenameTemplate,
  asset_filenames: FilenameTemplate,
}

impl OutputNaming {
  pub fn new(
    stamp: String,
    entry_filenames: FilenameTemplate,
    chunk_filenames: FilenameTemplate,
    asset_filenames: FilenameTemplate,
  ) -> Self {
    Self { stamp, entry_filenames, chunk_filenames, asset_filenames }
  }

  pub fn stamp(&self) -> &str {
    &self.stamp
  }

  /// Versioned path of the main script emitted for the page at
  /// `relative_path` (relative to the source root).
  pub fn entry_filename(&self, relative_path: &Path) -> String {
    let name = relative_path.collapsed_output_name();
    self.entry_filenames.render(&FileNameRenderOptions {
      name: Some(&name),
      stamp: Some(&self.stamp),
      ext: Some("js"),
    })
  }

  /// Versioned path of a shared script chunk, named by its logical chunk name
  /// rather than a source path.
  pub fn chunk_filename(&self, chunk_name: Option<&str>) -> String {
    let name = match chunk_name {
      Some(name) if !name.is_empty() => sanitize_file_name(name),
      _ => INDEX_NAME.to_string(),
    };
    self.chunk_filenames.render(&FileNameRenderOptions {
      name: Some(&name),
      stamp: Some(&self.stamp),
      ext: Some("js"),
    })
  }

  /// Versioned path of a non-script asset, bucketed by its extension.
  pub fn asset_filename(&self, relative_path: &Path) -> String {
    let name = relative_path.collapsed_output_name();
    let ext = relative_path.extension().and_then(|ext| ext.to_str());
    self.asset_filenames.render(&FileNameRenderOptions {
      name: Some(&name),
      stamp: Some(&self.stamp),
      ext,
    })
  }
}

#[cfg(test)]
fn naming() -> OutputNaming {
  OutputNaming::new(
    "202687".to_string(),
    FilenameTemplate::new("assets/js/[name].[stamp].js".to_string()),
    FilenameTemplate::new("assets/js/_chunk/[name].[stamp].js".to_string()),
    FilenameTemplate::new("assets/[ext]/[name].[stamp][extname]".to_string()),
  )
}

#[test]
fn test_entry_filename() {
  let naming = naming();
  assert_eq!(naming.entry_filename(Path::new("index.html")), "assets/js/index.202687.js");
  assert_eq!(naming.entry_filename(Path::new("foo/index.html")), "assets/js/foo.202687.js");
  assert_eq!(naming.entry_filename(Path::new("foo/bar.html")), "assets/js/foo-bar.202687.js");
}

#[test]
fn test_chunk_filename_falls_back_to_index() {
  let naming = naming();
  assert_eq!(naming.chunk_filename(Some("vendor")), "assets/js/_chunk/vendor.202687.js");
  assert_eq!(naming.chunk_filename(None), "assets/js/_chunk/index.202687.js");
  assert_eq!(naming.chunk_filename(Some("")), "assets/js/_chunk/index.202687.js");
  // Chunk names come from arbitrary module graphs and get sanitized.
  assert_eq!(
    naming.chunk_filename(Some("vendor/react")),
    "assets/js/_chunk/vendor_react.202687.js"
  );
}

#[test]
fn test_asset_filename_buckets_by_extension() {
  let naming = naming();
  assert_eq!(
    naming.asset_filename(Path::new("assets/img/logo.png")),
    "assets/png/assets-img-logo.202687.png"
  );
  assert_eq!(
    naming.asset_filename(Path::new("style/site.css")),
    "assets/css/style-site.202687.css"
  );
}
