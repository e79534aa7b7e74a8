#![forbid(unsafe_code)]
//! lazyseq-operators: lazy combinators over `lazyseq-core` producers.
//!
//! Design intent:
//! - Every combinator takes anything `IntoProducer` and returns a new producer
//!   that owns its upstream. Nothing is pulled at construction time.
//! - One pull at the outermost producer cascades exactly as far upstream as
//!   needed, so `filter -> map -> filter` is a single pass.
//! - Terminal operations (`foldl`, `foldl1`, `to_vec`, `drain`) are the only
//!   places that consume a whole chain.

pub mod concat;
pub mod delete;
pub mod drain;
pub mod filter;
pub mod fold;
pub mod map;
pub mod metrics;
pub mod slice;
pub mod traits;
pub mod zip;

pub use concat::{concat, Concat};
pub use delete::{delete, Delete};
pub use drain::{drain, to_vec};
pub use filter::{filter, Filter};
pub use fold::{foldl, foldl1};
pub use map::{map, Map};
pub use slice::{slice, slice_by, Slice};
pub use traits::ProducerExt;
pub use zip::{zip, Zip};
