//! Itertools-style Generators
//!
//! Each function starts a producer thread and returns its [`Generator`]
//! handle. The same algorithms are available as methods on [`Spawner`] when
//! the producer threads need custom settings.
//!
//! | Function | Ends? | Emissions |
//! |----------|-------|-----------|
//! | [`count`] | never | `start, start+step, ...` |
//! | [`cycle`] | never | `data[k % len]` |
//! | [`accumulate`] | yes | `len(data)` |
//! | [`accumulate_with_init`] | yes | `len(data) + 1` |
//! | [`chain`], [`chain_from_iterable`] | yes | sum of inner lengths |
//! | [`pairwise`] | yes | `max(0, len(data) - 1)` |
//!
//! [`Generator`]: crate::Generator
//! [`Spawner`]: crate::Spawner

mod accumulate;
mod chain;
mod infinite;
mod pairwise;

pub use accumulate::{accumulate, accumulate_with_init};
pub use chain::{chain, chain_from_iterable};
pub use infinite::{count, cycle};
pub use pairwise::pairwise;
