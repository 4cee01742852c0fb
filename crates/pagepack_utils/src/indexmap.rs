use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Insertion-ordered map keyed with the fast non-cryptographic hasher. Entry
/// maps must keep a stable iteration order so the emitted configuration is
/// reproducible across runs.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
