use pagepack_common::{
  BuildOptions, NormalizedBuildOptions, NormalizedCssOptions, NormalizedServerOptions,
};

/// Applies defaults and anchors every configured path at `cwd`. Runs once per
/// invocation, before any file-system access.
pub fn normalize_options(mut raw_options: BuildOptions) -> NormalizedBuildOptions {
  let cwd = raw_options
    .cwd
    .take()
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let src_dir = cwd.join(raw_options.src_dir.as_deref().unwrap_or("src"));
  let public_dir = cwd.join(raw_options.public_dir.as_deref().unwrap_or("public"));
  let out_dir = cwd.join(raw_options.out_dir.as_deref().unwrap_or("dist"));
  let env_file = raw_options.env_file.map_or_else(|| cwd.join(".env"), |file| cwd.join(file));

  let page_extension = raw_options
    .page_extension
    .map_or_else(|| "html".to_string(), |ext| ext.trim_start_matches('.').to_string());

  let css = raw_options.css.unwrap_or_default();
  let server = raw_options.server.unwrap_or_default();

  NormalizedBuildOptions {
    cwd,
    src_dir,
    public_dir,
    page_extension,
    env_file,
    out_dir,
    base: raw_options.base.unwrap_or_else(|| "./".to_string()),
    empty_out_dir: raw_options.empty_out_dir.unwrap_or(true),
    entry_filenames: raw_options
      .entry_filenames
      .unwrap_or_else(|| "assets/js/[name].[stamp].js".to_string()),
    chunk_filenames: raw_options
      .chunk_filenames
      .unwrap_or_else(|| "assets/js/_chunk/[name].[stamp].js".to_string()),
    asset_filenames: raw_options
      .asset_filenames
      .unwrap_or_else(|| "assets/[ext]/[name].[stamp][extname]".to_string()),
    chunk_size_warning_limit: raw_options.chunk_size_warning_limit.unwrap_or(500 * 1024),
    module_preload_polyfill: raw_options.module_preload_polyfill.unwrap_or(false),
    css: NormalizedCssOptions {
      dev_sourcemap: css.dev_sourcemap.unwrap_or(false),
      autoprefixer_grid: css.autoprefixer_grid.unwrap_or(false),
      additional_data: css.additional_data,
    },
    alias: raw_options.alias.unwrap_or_default(),
    drop: raw_options.drop.unwrap_or_else(|| vec!["console".to_string(), "debugger".to_string()]),
    server: NormalizedServerOptions {
      open: server.open.unwrap_or(false),
      host: server.host.unwrap_or(false),
      port: server.port,
    },
  }
}

#[test]
fn test_normalize_defaults() {
  use std::path::{Path, PathBuf};

  let options = normalize_options(BuildOptions {
    cwd: Some(PathBuf::from("/site")),
    ..BuildOptions::default()
  });

  assert_eq!(options.src_dir, Path::new("/site/src"));
  assert_eq!(options.public_dir, Path::new("/site/public"));
  assert_eq!(options.out_dir, Path::new("/site/dist"));
  assert_eq!(options.env_file, Path::new("/site/.env"));
  assert_eq!(options.page_extension, "html");
  assert_eq!(options.base, "./");
  assert!(options.empty_out_dir);
  assert!(!options.module_preload_polyfill);
  assert_eq!(options.drop, ["console", "debugger"]);
  assert_eq!(options.server.port, None);
}

#[test]
fn test_normalize_strips_extension_dot() {
  use std::path::PathBuf;

  let options = normalize_options(BuildOptions {
    cwd: Some(PathBuf::from("/site")),
    page_extension: Some(".htm".to_string()),
    ..BuildOptions::default()
  });

  assert_eq!(options.page_extension, "htm");
}
