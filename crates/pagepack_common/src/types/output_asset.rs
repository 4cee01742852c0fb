use arcstr::ArcStr;
use serde::Serialize;

use crate::OutputKind;

/// One planned build output: its logical name, content category, and the
/// versioned path it will be written under inside the output directory.
#[derive(Debug, Clone, Serialize)]
pub struct OutputAsset {
  pub name: ArcStr,
  pub kind: OutputKind,
  pub filename: String,
}

impl OutputAsset {
  pub fn filename(&self) -> &str {
    &self.filename
  }
}

#[test]
fn test_output_asset_filename() {
  let asset = OutputAsset {
    name: arcstr::literal!("vendor"),
    kind: OutputKind::SharedChunk,
    filename: "assets/js/_chunk/vendor.202687.js".to_string(),
  };
  assert_eq!(asset.filename(), "assets/js/_chunk/vendor.202687.js");
  assert_ne!(OutputKind::StaticAsset, asset.kind);
}
