//! Small, pure transformations over sequences.
//!
//! Every operation accepts anything that implements `IntoIterator`, including
//! single-pass iterators. Pass `&mut iter` to apply an operation to an iterator
//! without giving it up.
//!
//! - [`count`] - number of elements, by full traversal
//! - [`flatten`] - lazy depth-first leaves of a nested structure (see [`Nest`])
//! - [`distinct`] - unique elements in first-occurrence order
//! - [`group_by`] - records bucketed by the value of a lookup key (see [`Lookup`])
//! - [`chunks`] - lazy fixed-size chunks, the last one padded with `None`
//! - [`first`] / [`last`] - boundary elements, `None` when the input is empty
//!
//! The same operations are available as iterator methods through
//! [`SeqIteratorsExt`]. With the `json` feature (on by default), the [`json`]
//! module binds them to `serde_json::Value`.

pub mod chunk;
pub mod count;
pub mod distinct;
pub mod ends;
pub mod flatten;
pub mod group;
pub mod iter_ext;
#[cfg(feature = "json")]
pub mod json;

pub use chunk::{ArrayChunks, Chunks, array_chunks, chunks};
pub use count::count;
pub use distinct::{distinct, distinct_by};
pub use ends::{first, last};
pub use flatten::{Flatten, Nest, Nested, flatten};
pub use group::{Groups, Lookup, group_by, group_by_key};
pub use iter_ext::SeqIteratorsExt;

pub use seqkit_common::{Error, ErrorKind, Result};
