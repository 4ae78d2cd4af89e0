//! Ordered map merging.
//!
//! [`merge_maps`] combines two ordered maps with the overlay winning on key
//! collisions. It lets auth fields layer caller-supplied inputs over the
//! inputs they generate.
//!
//! # Example
//!
//! ```
//! use connector_sdk_core::merge_maps;
//! use indexmap::IndexMap;
//!
//! let base: IndexMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let overlay: IndexMap<&str, i32> = [("b", 20), ("c", 30)].into_iter().collect();
//!
//! let merged = merge_maps(&base, &overlay);
//! assert_eq!(merged.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 20), ("c", 30)]);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

/// Merges `overlay` into a copy of `base`.
///
/// Keys present in both maps take the overlay value but keep their position
/// from `base`; overlay-only keys are appended in overlay order. The result
/// holds exactly one entry per key of the union.
pub fn merge_maps<K, V>(base: &IndexMap<K, V>, overlay: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
