use std::fs;
use std::path::Path;

use pagepack::{BuildOptions, Packer};
use pagepack_utils::version_stamp::today_stamp;

fn write(path: &Path, content: &str) {
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, content).unwrap();
}

fn site(root: &Path, pages: &[&str]) {
  write(&root.join(".env"), "PORT=5173\n");
  for page in pages {
    write(&root.join("src").join(page), "<html></html>");
  }
}

fn packer(root: &Path) -> Packer {
  Packer::new(BuildOptions { cwd: Some(root.to_path_buf()), ..BuildOptions::default() })
}

#[test]
fn resolves_entry_map_for_a_multi_page_site() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html", "a/index.html", "a/b.html"]);

  let packer = packer(dir.path());
  assert_eq!(packer.options().page_extension, "html");

  let output = packer.resolve().unwrap();
  let entries = &output.config.entries;

  assert!(output.warnings.is_empty());
  assert_eq!(entries.len(), 3);
  assert_eq!(entries["index"].relative_path, Path::new("index.html"));
  assert_eq!(entries["a"].relative_path, Path::new("a/index.html"));
  assert_eq!(entries["a-b"].relative_path, Path::new("a/b.html"));
  assert!(entries.values().all(|page| page.absolute_path.is_absolute()));
}

#[test]
fn ignores_files_without_the_page_extension() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html"]);
  write(&dir.path().join("src/assets/site.css"), "body {}");
  write(&dir.path().join("src/app.js"), "export {}");
  write(&dir.path().join("src/UPPER.HTML"), "<html></html>");

  let output = packer(dir.path()).resolve().unwrap();

  // Extension matching is case-sensitive and exact.
  assert_eq!(output.config.entries.len(), 1);
  assert!(output.config.entries.contains_key("index"));
}

#[test]
fn plans_versioned_entry_outputs() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html", "blog/index.html", "blog/first-post.html"]);

  let output = packer(dir.path()).resolve().unwrap();
  let stamp = today_stamp();

  let filenames: Vec<&str> =
    output.config.assets.iter().map(pagepack::OutputAsset::filename).collect();
  assert!(filenames.contains(&format!("assets/js/index.{stamp}.js").as_str()));
  assert!(filenames.contains(&format!("assets/js/blog.{stamp}.js").as_str()));
  assert!(filenames.contains(&format!("assets/js/blog-first-post.{stamp}.js").as_str()));

  assert_eq!(output.config.naming.stamp(), stamp);
  assert_eq!(
    output.config.naming.chunk_filename(Some("vendor")),
    format!("assets/js/_chunk/vendor.{stamp}.js")
  );
  assert_eq!(
    output.config.naming.asset_filename(Path::new("assets/img/logo.png")),
    format!("assets/png/assets-img-logo.{stamp}.png")
  );
}

#[test]
fn missing_source_root_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  write(&dir.path().join(".env"), "PORT=5173\n");

  let errors = packer(dir.path()).resolve().unwrap_err();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("not found"));
}

#[test]
fn missing_env_file_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  write(&dir.path().join("src/index.html"), "<html></html>");

  let errors = packer(dir.path()).resolve().unwrap_err();
  assert!(errors[0].to_string().contains("environment file"));
}

#[test]
fn malformed_env_file_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html"]);
  write(&dir.path().join(".env"), "PORT\n");

  assert!(packer(dir.path()).resolve().is_err());
}

#[test]
fn duplicate_entry_names_warn_and_last_write_wins() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["a-b.html", "a/b.html"]);

  let output = packer(dir.path()).resolve().unwrap();

  assert_eq!(output.config.entries.len(), 1);
  assert_eq!(output.config.entries["a-b"].relative_path, Path::new("a/b.html"));
  assert_eq!(output.warnings.len(), 1);
}

#[test]
fn server_port_falls_back_to_the_environment() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html"]);

  let output = packer(dir.path()).resolve().unwrap();

  // The live process environment wins over the env file when both set PORT.
  let expected = std::env::var("PORT").unwrap_or_else(|_| "5173".to_string());
  assert_eq!(output.config.server.port.as_deref(), Some(expected.as_str()));
}

#[test]
fn resolved_config_serializes_as_a_plain_mapping() {
  let dir = tempfile::tempdir().unwrap();
  site(dir.path(), &["index.html", "a/b.html"]);

  let output = packer(dir.path()).resolve().unwrap();
  let value = serde_json::to_value(&output.config).unwrap();

  assert!(value["entries"]["a-b"]["relative_path"].is_string());
  assert!(value["naming"].is_object());
  assert!(value["options"]["empty_out_dir"].as_bool().unwrap());
}
