//! Fallible terminal operations.
//!
//! The callback's own error type is returned unchanged and the traversal stops
//! at the first failure.
use super::core::IterStream;

impl<T: 'static> IterStream<T> {
    pub fn try_for_each<E, F>(&self, callback: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        self.iter().try_for_each(callback)
    }

    /// Left fold with a fallible reducer.
    pub fn try_reduce<S, E, F>(&self, reducer: F, initial_value: S) -> Result<S, E>
    where
        F: FnMut(S, T) -> Result<S, E>,
    {
        self.iter().try_fold(initial_value, reducer)
    }

    /// First element for which `predicate` returns `Ok(true)`.
    pub fn try_find<E, F>(&self, mut predicate: F) -> Result<Option<T>, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        for item in self.iter() {
            if predicate(&item)? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

impl<T: 'static, E: 'static> IterStream<Result<T, E>> {
    /// Collect the `Ok` values, stopping at the first `Err`.
    pub fn try_to_vec(&self) -> Result<Vec<T>, E> {
        self.iter().collect()
    }
}
