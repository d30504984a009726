//! Quickiter: itertools-style generators on threads and rendezvous channels
//!
//! Every generator runs as its own producer thread and hands values to the
//! consumer one at a time. A send blocks until the value has been received,
//! so producers can never run ahead of the code reading from them.
//!
//! # Features
//!
//! - **Lazy**: nothing is computed until the consumer asks for it
//! - **Backpressure**: at most one value is ever in flight
//! - **Typed termination**: finite and infinite generators are different types
//! - **Leak-free abandonment**: dropping a generator stops its producer
//!
//! # Quick Start
//!
//! ```
//! use quickiter::{accumulate, count, pairwise};
//!
//! fn main() -> quickiter::Result<()> {
//!     let sums = accumulate(vec![1, 2, 3, 4, 5], |a, b| a + b)?;
//!     assert_eq!(sums.drain(), vec![1, 3, 6, 10, 15]);
//!
//!     let mut multiples = count(0, 4)?;
//!     assert_eq!(multiples.take_vec(5), vec![0, 4, 8, 12, 16]);
//!
//!     let pairs: Vec<_> = pairwise(vec![1, 2, 3])?.collect();
//!     assert_eq!(pairs, vec![(1, 2), (2, 3)]);
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! | Category | Modules |
//! |----------|---------|
//! | **Generators** | [`itertools`] |
//! | **Plumbing** | [`channel`], [`generator`] |
//! | **Support** | [`config`], [`oracle`], [`error`](Error) |

pub mod channel;
pub mod config;
pub mod generator;
pub mod itertools;
pub mod oracle;
pub mod prelude;

mod error;

pub use error::{Error, ExitKind, Result};
pub use generator::{Finite, Generator, Infinite, Spawner, Termination};
pub use itertools::{accumulate, accumulate_with_init, chain, chain_from_iterable, count, cycle, pairwise};

/// Quickiter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
