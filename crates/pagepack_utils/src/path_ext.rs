use std::{ffi::OsStr, path::Path};

use sugar_path::SugarPath;

/// Reserved stem of a directory-default page, and the fallback whenever name
/// derivation produces nothing usable.
pub const INDEX_NAME: &str = "index";

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  /// Logical entry name of a page file, derived from its path relative to the
  /// source root. `foo/index.html` names the directory (`foo`), any other
  /// page joins its parent directory and stem (`foo/bar.html` -> `foo-bar`).
  fn page_entry_name(&self) -> String;

  /// Output name of a build artifact, derived from its path relative to the
  /// source root: extension and a trailing `index` segment are dropped, the
  /// remaining segments joined with `-`.
  fn collapsed_output_name(&self) -> String;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn page_entry_name(&self) -> String {
    let base_name = self.file_stem().unwrap_or_else(|| OsStr::new("")).to_string_lossy();
    let dir_name =
      self.parent().and_then(Path::file_name).unwrap_or_else(|| OsStr::new("")).to_string_lossy();

    let name = if base_name == INDEX_NAME {
      if dir_name.is_empty() {
        INDEX_NAME.to_string()
      } else {
        dir_name.into_owned()
      }
    } else if dir_name.is_empty() {
      base_name.into_owned()
    } else {
      format!("{dir_name}-{base_name}")
    };

    if name.is_empty() || name == "/" || name.contains('.') {
      INDEX_NAME.to_string()
    } else {
      name
    }
  }

  fn collapsed_output_name(&self) -> String {
    let slashed = self.with_extension("").expect_to_slash();
    let mut segments: Vec<&str> =
      slashed.split('/').filter(|segment| !segment.is_empty() && *segment != ".").collect();

    if segments.last().is_some_and(|segment| *segment == INDEX_NAME) {
      segments.pop();
    }

    let name = segments.join("-");
    let name = name.trim_end_matches('-');

    if name.is_empty() {
      INDEX_NAME.to_string()
    } else {
      name.to_string()
    }
  }
}

#[test]
fn test_page_entry_name() {
  assert_eq!(Path::new("index.html").page_entry_name(), "index");
  assert_eq!(Path::new("about.html").page_entry_name(), "about");
  assert_eq!(Path::new("foo/index.html").page_entry_name(), "foo");
  assert_eq!(Path::new("foo/bar.html").page_entry_name(), "foo-bar");
  // Only the immediate parent directory contributes to the name.
  assert_eq!(Path::new("foo/bar/baz.html").page_entry_name(), "bar-baz");
  assert_eq!(Path::new("foo/bar/index.html").page_entry_name(), "bar");
  // Dotted stems collapse to the reserved index name.
  assert_eq!(Path::new("foo/bar.test.html").page_entry_name(), "index");
}

#[test]
fn test_page_entry_name_is_pure() {
  let path = Path::new("foo/bar.html");
  assert_eq!(path.page_entry_name(), path.page_entry_name());
}

#[test]
fn test_collapsed_output_name() {
  assert_eq!(Path::new("index.html").collapsed_output_name(), "index");
  assert_eq!(Path::new("foo/index.html").collapsed_output_name(), "foo");
  assert_eq!(Path::new("foo/bar.html").collapsed_output_name(), "foo-bar");
  assert_eq!(Path::new("foo/bar/baz.html").collapsed_output_name(), "foo-bar-baz");
  assert_eq!(Path::new("img/logo.png").collapsed_output_name(), "img-logo");
  assert_eq!(Path::new("a-/index.html").collapsed_output_name(), "a");
}

#[test]
fn test_collapsed_output_name_has_no_separators() {
  for path in ["a/b/c.html", "deep/tree/of/pages/index.html"] {
    assert!(!Path::new(path).collapsed_output_name().contains('/'));
  }
}
