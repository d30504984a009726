//! Running folds: `accumulate` and `accumulate_with_init`
//!
//! The fold function always receives `(accumulated, next)` in that order; it
//! does not need to be associative or commutative.

use crate::error::Result;
use crate::generator::{Finite, Generator, Spawner};

impl Spawner {
    /// See [`accumulate`]
    pub fn accumulate<I, T, F>(&self, data: I, mut fold: F) -> Result<Generator<T, Finite>>
    where
        I: IntoIterator<Item = T> + Send + 'static,
        T: Clone + Send + 'static,
        F: FnMut(T, T) -> T + Send + 'static,
    {
        self.spawn::<T, Finite, _>("accumulate", move |tx| {
            let mut items = data.into_iter();
            let Some(mut acc) = items.next() else {
                return Ok(());
            };

            tx.send(acc.clone())?;
            for item in items {
                acc = fold(acc, item);
                tx.send(acc.clone())?;
            }
            Ok(())
        })
    }

    /// See [`accumulate_with_init`]
    pub fn accumulate_with_init<I, T, A, F>(
        &self,
        data: I,
        mut fold: F,
        initial: A,
    ) -> Result<Generator<A, Finite>>
    where
        I: IntoIterator<Item = T> + Send + 'static,
        A: Clone + Send + 'static,
        F: FnMut(A, T) -> A + Send + 'static,
    {
        self.spawn::<A, Finite, _>("accumulate_with_init", move |tx| {
            let mut acc = initial;
            tx.send(acc.clone())?;
            for item in data {
                acc = fold(acc, item);
                tx.send(acc.clone())?;
            }
            Ok(())
        })
    }
}

/// Emit the running fold of `data`, starting with `data[0]` itself.
///
/// With addition this is the cumulative sum:
/// `accumulate(vec![1, 2, 3, 4], |a, b| a + b)` → 1, 3, 6, 10.
///
/// Exactly one value per input element; an empty `data` closes immediately.
///
/// ```
/// // Subtraction is not commutative: the accumulator is always on the left.
/// let gen = quickiter::accumulate(vec![5, 4, 3, 2, 1], |a, b| a - b)?;
/// assert_eq!(gen.drain(), vec![5, 1, -2, -4, -5]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn accumulate<I, T, F>(data: I, fold: F) -> Result<Generator<T, Finite>>
where
    I: IntoIterator<Item = T> + Send + 'static,
    T: Clone + Send + 'static,
    F: FnMut(T, T) -> T + Send + 'static,
{
    Spawner::default().accumulate(data, fold)
}

/// Like [`accumulate`], but the first value emitted is `initial` and `fold`
/// is applied to every element, the first one included.
///
/// Emits `len(data) + 1` values; for an empty `data` that is just `initial`.
///
/// ```
/// let gen = quickiter::accumulate_with_init(vec![5, 4, 3, 2, 1], |a, b| a - b, 0)?;
/// assert_eq!(gen.drain(), vec![0, -5, -9, -12, -14, -15]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn accumulate_with_init<I, T, A, F>(data: I, fold: F, initial: A) -> Result<Generator<A, Finite>>
where
    I: IntoIterator<Item = T> + Send + 'static,
    A: Clone + Send + 'static,
    F: FnMut(A, T) -> A + Send + 'static,
{
    Spawner::default().accumulate_with_init(data, fold, initial)
}
