//! Flattening one level of nesting: `chain` and `chain_from_iterable`

use crate::error::Result;
use crate::generator::{Finite, Generator, Spawner};

impl Spawner {
    /// See [`chain_from_iterable`]
    pub fn chain_from_iterable<I, T>(&self, nested: I) -> Result<Generator<T, Finite>>
    where
        I: IntoIterator + Send + 'static,
        I::Item: IntoIterator<Item = T>,
        T: Send + 'static,
    {
        self.spawn::<T, Finite, _>("chain", move |tx| {
            for sequence in nested {
                for item in sequence {
                    tx.send(item)?;
                }
            }
            Ok(())
        })
    }

    /// See [`chain`]
    pub fn chain<S, T, const N: usize>(&self, sequences: [S; N]) -> Result<Generator<T, Finite>>
    where
        S: IntoIterator<Item = T> + Send + 'static,
        T: Send + 'static,
    {
        self.chain_from_iterable(sequences)
    }
}

/// Emit every element of each sequence in turn.
///
/// Sequences are given as a fixed-size array; the [`chain!`](crate::chain!)
/// macro offers the argument-list form. Empty sequences contribute nothing.
///
/// ```
/// let gen = quickiter::chain([vec![1, 2], vec![], vec![3]])?;
/// assert_eq!(gen.drain(), vec![1, 2, 3]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn chain<S, T, const N: usize>(sequences: [S; N]) -> Result<Generator<T, Finite>>
where
    S: IntoIterator<Item = T> + Send + 'static,
    T: Send + 'static,
{
    Spawner::default().chain(sequences)
}

/// Flatten a sequence of sequences by one level.
///
/// Produces exactly the same stream as [`chain`] would for the same inner
/// sequences; only the calling convention differs.
///
/// ```
/// let gen = quickiter::chain_from_iterable(vec![vec![], vec![5, 6], vec![]])?;
/// assert_eq!(gen.drain(), vec![5, 6]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn chain_from_iterable<I, T>(nested: I) -> Result<Generator<T, Finite>>
where
    I: IntoIterator + Send + 'static,
    I::Item: IntoIterator<Item = T>,
    T: Send + 'static,
{
    Spawner::default().chain_from_iterable(nested)
}

/// Chain any number of sequences of the same type.
///
/// `chain![a, b, c]` is `chain([a, b, c])`. With no arguments the sequence
/// type has to come from an annotation on the binding.
///
/// ```
/// let gen = quickiter::chain![vec!['a'], vec!['b', 'c']]?;
/// assert_eq!(gen.drain(), vec!['a', 'b', 'c']);
/// # Ok::<(), quickiter::Error>(())
/// ```
#[macro_export]
macro_rules! chain {
    ($($sequence:expr),* $(,)?) => {
        $crate::itertools::chain([$($sequence),*])
    };
}
