#![forbid(unsafe_code)]
//! lazyseq-core: the pull-based `Producer` abstraction and its sources.
//!
//! A producer yields one element per `pull()` until it reports exhaustion,
//! after which every further `pull()` reports exhaustion again. Combinators
//! (in `lazyseq-operators`) wrap producers in new producers; nothing is
//! materialized until a consumer drains the outermost one.
//!
//! This crate holds only the protocol and the leaf sources:
//! - [`Producer`] / [`State`]: the resumable unit and its sticky exhaustion flag.
//! - [`IntoProducer`]: anything a combinator accepts as a source.
//! - [`Restart`]: explicit replay from the start.
//! - [`from_range`], [`from_slice`], [`from_iter`]: source adapters.

pub mod config;
pub mod error;
pub mod ordinal;
pub mod prelude;
pub mod producer;
pub mod source;
pub mod state;

pub use config::DrainConfig;
pub use error::{Error, Result};
pub use ordinal::Ordinal;
pub use producer::{BoxProducer, Items, Producer, Restart};
pub use source::{
    from_iter, from_range, from_slice, FromIter, FromRange, FromSlice, IntoProducer, Span,
};
pub use state::State;
