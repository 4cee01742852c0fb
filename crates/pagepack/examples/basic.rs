use std::path::PathBuf;

use pagepack::{AliasItem, BuildOptions, CssOptions, Packer, ServerOptions};

fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let packer = Packer::new(BuildOptions {
    cwd: Some(root.clone()),
    alias: Some(vec![AliasItem::new("@scss", root.join("src/assets/scss"))]),
    css: Some(CssOptions {
      dev_sourcemap: Some(true),
      additional_data: Some("@import \"@scss/common.scss\";".to_string()),
      ..CssOptions::default()
    }),
    server: Some(ServerOptions { open: Some(true), host: Some(true), port: None }),
    ..BuildOptions::default()
  });

  match packer.resolve() {
    Ok(output) => {
      for warning in &output.warnings {
        eprintln!("Warning: {warning}");
      }
      for (name, page) in &output.config.entries {
        eprintln!("{name} -> {}", page.relative_path.display());
      }
      for asset in &output.config.assets {
        eprintln!("{}", asset.filename());
      }
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("Error: {error}");
      }
    }
  }
}
