use anyhow::anyhow;
use arcstr::ArcStr;
use itertools::Itertools;
use pagepack_common::{EntryMap, PageFile};
use pagepack_error::BuildResult;
use pagepack_fs::FileSystem;
use pagepack_utils::path_ext::PathExt;
use sugar_path::SugarPath;

use crate::types::SharedOptions;

pub struct ScanStageOutput {
  pub entries: EntryMap,
  pub warnings: Vec<anyhow::Error>,
}

pub struct ScanStage<F: FileSystem> {
  fs: F,
  options: SharedOptions,
}

impl<F: FileSystem> ScanStage<F> {
  pub fn new(fs: F, options: SharedOptions) -> Self {
    Self { fs, options }
  }

  /// Discovers every page file under the source root and derives the entry
  /// map. A missing root or any traversal error aborts the build; without its
  /// entry points there is nothing to configure.
  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    let root = self.fs.canonicalize(&self.options.src_dir).map_err(|error| {
      anyhow!("Source directory {} not found: {error}", self.options.src_dir.display())
    })?;

    if !self.fs.is_dir(&root) {
      Err(anyhow!("Source directory {} is not a directory", root.display()))?;
    }

    let files = self
      .fs
      .walk_files(&root)
      .map_err(|error| anyhow!("Failed to scan {}: {error}", root.display()))?;

    let page_files = files
      .into_iter()
      .filter(|path| {
        path.extension().is_some_and(|ext| ext == self.options.page_extension.as_str())
      })
      .map(|path| {
        let relative_path = path.relative(&root);
        PageFile::new(path, relative_path)
      })
      .collect::<Vec<_>>();

    let (entries, warnings) = collect_entries(page_files);

    Ok(ScanStageOutput { entries, warnings })
  }
}

/// Builds the entry map from an unordered set of discovered page files. The
/// set is sorted by slash-normalized relative path first, so the result is a
/// pure function of the file set regardless of traversal order. On a name
/// collision the lexicographically later path wins and a warning is recorded.
pub fn collect_entries(page_files: Vec<PageFile>) -> (EntryMap, Vec<anyhow::Error>) {
  let mut entries = EntryMap::default();
  let mut warnings = Vec::new();

  let sorted =
    page_files.into_iter().sorted_by_cached_key(|page| page.relative_path.expect_to_slash());

  for page in sorted {
    let name = ArcStr::from(page.entry_name());
    if let Some(previous) = entries.insert(name.clone(), page) {
      warnings.push(anyhow!(
        "Duplicate entry name {name:?}: {} overwrites {}",
        entries[&name].relative_path.display(),
        previous.relative_path.display(),
      ));
    }
  }

  (entries, warnings)
}

#[cfg(test)]
fn page(relative: &str) -> PageFile {
  use std::path::{Path, PathBuf};
  PageFile::new(Path::new("/site/src").join(relative), PathBuf::from(relative))
}

#[test]
fn test_collect_entries_expected_names() {
  use std::path::Path;

  let (entries, warnings) =
    collect_entries(vec![page("a/index.html"), page("a/b.html"), page("index.html")]);

  assert!(warnings.is_empty());
  assert_eq!(entries.len(), 3);
  assert_eq!(entries["index"].relative_path, Path::new("index.html"));
  assert_eq!(entries["a"].relative_path, Path::new("a/index.html"));
  assert_eq!(entries["a-b"].relative_path, Path::new("a/b.html"));
}

#[test]
fn test_collect_entries_is_order_independent() {
  let files = ["index.html", "a/index.html", "a/b.html", "a-b.html", "blog/post.html"];

  let forward = collect_entries(files.iter().map(|file| page(file)).collect()).0;
  let reversed = collect_entries(files.iter().rev().map(|file| page(file)).collect()).0;

  assert_eq!(forward, reversed);
}

#[test]
fn test_collect_entries_last_write_wins() {
  use std::path::Path;

  let (entries, warnings) = collect_entries(vec![page("a/b.html"), page("a-b.html")]);

  // `a-b.html` sorts before `a/b.html`, so the nested page wins the name.
  assert_eq!(entries.len(), 1);
  assert_eq!(entries["a-b"].relative_path, Path::new("a/b.html"));
  assert_eq!(warnings.len(), 1);
  assert!(warnings[0].to_string().contains("a-b"));
}
