//! Sliding window of two: `pairwise`

use crate::error::Result;
use crate::generator::{Finite, Generator, Spawner};

impl Spawner {
    /// See [`pairwise`]
    pub fn pairwise<I, T>(&self, data: I) -> Result<Generator<(T, T), Finite>>
    where
        I: IntoIterator<Item = T> + Send + 'static,
        T: Clone + Send + 'static,
    {
        self.spawn::<(T, T), Finite, _>("pairwise", move |tx| {
            let mut items = data.into_iter();
            let Some(mut previous) = items.next() else {
                return Ok(());
            };

            for next in items {
                tx.send((previous, next.clone()))?;
                previous = next;
            }
            Ok(())
        })
    }
}

/// Emit successive overlapping pairs.
///
/// `pairwise(vec![1, 2, 3])` → (1, 2), (2, 3). Inputs with fewer than two
/// elements produce nothing; the last element is never paired with the first.
///
/// ```
/// let gen = quickiter::pairwise("abc".chars().collect::<Vec<_>>())?;
/// assert_eq!(gen.drain(), vec![('a', 'b'), ('b', 'c')]);
/// # Ok::<(), quickiter::Error>(())
/// ```
pub fn pairwise<I, T>(data: I) -> Result<Generator<(T, T), Finite>>
where
    I: IntoIterator<Item = T> + Send + 'static,
    T: Clone + Send + 'static,
{
    Spawner::default().pairwise(data)
}
