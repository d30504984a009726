//! Prelude module for convenient imports
//!
//! ```
//! use quickiter::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let letters: Generator<char> = chain_from_iterable(vec![vec!['a'], vec!['b']])?;
//!     assert_eq!(letters.drain(), vec!['a', 'b']);
//!     Ok(())
//! }
//! ```

// Generators
pub use crate::itertools::{
    accumulate, accumulate_with_init, chain, chain_from_iterable, count, cycle, pairwise,
};

// Handles and spawning
pub use crate::generator::{Finite, Generator, Infinite, Spawner};

// Channel plumbing
pub use crate::channel::{Receiver, Recv};

// Configuration
pub use crate::config::GeneratorConfig;

// Error handling
pub use crate::error::{Error, Result};

// Version constant
pub use crate::VERSION;
