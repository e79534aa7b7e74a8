//! Convenient re-exports for downstream crates.

pub use crate::config::DrainConfig;
pub use crate::error::{Error, Result};
pub use crate::producer::{BoxProducer, Producer, Restart};
pub use crate::source::{from_iter, from_range, from_slice, IntoProducer, Span};
pub use crate::state::State;
