//! Infinite generators: `count` and `cycle`

use std::sync::Arc;

use num_traits::{PrimInt, WrappingAdd};
use tracing::trace;

use crate::error::{Error, Result};
use crate::generator::{Generator, Infinite, Spawner};

impl Spawner {
    /// See [`count`]
    pub fn count<N>(&self, start: N, step: N) -> Result<Generator<N, Infinite>>
    where
        N: PrimInt + WrappingAdd + Send + 'static,
    {
        self.spawn::<N, Infinite, _>("count", move |tx| {
            let mut current = start;
            loop {
                tx.send(current)?;
                current = current.wrapping_add(&step);
            }
        })
    }

    /// See [`cycle`]
    pub fn cycle<T>(&self, data: impl Into<Arc<[T]>>) -> Result<Generator<T, Infinite>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let data: Arc<[T]> = data.into();
        if data.is_empty() {
            return Err(Error::EmptyCycle);
        }
        trace!(len = data.len(), "cycling");

        self.spawn::<T, Infinite, _>("cycle", move |tx| loop {
            for item in data.iter() {
                tx.send(item.clone())?;
            }
        })
    }
}

/// Count up from `start` in increments of `step`, forever.
///
/// `count(10, 1)` → 10, 11, 12, 13, ...
///
/// Arithmetic wraps at the bounds of `N`, so the k-th value is always
/// `start + k * step` modulo the integer width.
///
/// ```
/// let mut evens = quickiter::count(0, 2)?;
/// assert_eq!(evens.take_vec(4), vec![0, 2, 4, 6]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn count<N>(start: N, step: N) -> Result<Generator<N, Infinite>>
where
    N: PrimInt + WrappingAdd + Send + 'static,
{
    Spawner::default().count(start, step)
}

/// Repeat the elements of `data` in order, forever.
///
/// `cycle(vec![1, 2, 3])` → 1, 2, 3, 1, 2, 3, 1, ...
///
/// Takes anything that converts into an `Arc<[T]>`, so a shared slice can be
/// cycled without copying it. Each emission is a clone of the element; for
/// handle types such as `Arc<Mutex<_>>` every consumer receives the same
/// shared handle, not a snapshot.
///
/// Returns [`Error::EmptyCycle`] when `data` is empty.
pub fn cycle<T>(data: impl Into<Arc<[T]>>) -> Result<Generator<T, Infinite>>
where
    T: Clone + Send + Sync + 'static,
{
    Spawner::default().cycle(data)
}
