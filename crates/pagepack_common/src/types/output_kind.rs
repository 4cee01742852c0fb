use serde::Serialize;

/// Content category of a build output, which selects its bucket under the
/// assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
  /// Main script compiled for one page entry.
  EntryScript,
  /// Shared or dynamically split script chunk, named by its logical chunk
  /// name rather than a path.
  SharedChunk,
  /// Any other emitted static asset, bucketed by file extension.
  StaticAsset,
}
