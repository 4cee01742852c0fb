use arcstr::ArcStr;
use pagepack_utils::indexmap::FxIndexMap;

use crate::PageFile;

/// Unique logical entry name -> discovered page file. Insertion order is the
/// sorted order of relative paths, so two invocations over the same file set
/// produce identical maps regardless of traversal order.
pub type EntryMap = FxIndexMap<ArcStr, PageFile>;
