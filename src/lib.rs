#![forbid(unsafe_code)]
//! lazyseq: lazy, single-pass sequence combinators.
//!
//! Re-exports `lazyseq-core` (the producer protocol and sources) and
//! `lazyseq-operators` (combinators and folds).
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let squares_of_evens = from_range(1, 10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .to_vec();
//! assert_eq!(squares_of_evens, vec![4, 16, 36, 64, 100]);
//!
//! assert_eq!(foldl(1..=10, 0, |a, b| a + b), 55);
//! ```

pub use lazyseq_core::*;
pub use lazyseq_operators::*;

pub mod prelude {
    pub use lazyseq_core::prelude::*;
    pub use lazyseq_operators::{
        concat, delete, drain, filter, foldl, foldl1, map, slice, slice_by, to_vec, zip,
        ProducerExt,
    };
}
