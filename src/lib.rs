#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A HashMap implementation using Robin Hood hashing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hasher builder used by [`HashMap`] when no explicit
        /// hasher is supplied.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else {
        /// Placeholder hasher builder. Enable the `foldhash` feature for a
        /// usable default, or supply a hasher via
        /// [`HashMap::with_hasher`](hash_map::HashMap::with_hasher).
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHashBuilder {}
    }
}

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
