//! Drawable cache
//!
//! Memoizes anything expensive to build per frame (decoded images, rendered
//! text, off-screen targets) under a string key. Entries live until the
//! cache is dropped.

use std::collections::HashMap;

pub struct DrawableCache<T> {
    entries: HashMap<String, T>,
}

impl<T> DrawableCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the entry for `key`, producing it on first use.
    ///
    /// `produce` runs at most once per key. If it fails, nothing is stored and
    /// the next call retries.
    pub fn resolve<E, F>(&mut self, key: &str, produce: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        // A hit is a plain lookup; the key is only copied on a miss
        if !self.entries.contains_key(key) {
            let value = produce()?;
            self.entries.insert(key.to_owned(), value);
        }
        Ok(self
            .entries
            .get_mut(key)
            .unwrap_or_else(|| unreachable!("{key} is present after insert")))
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Lend an entry out, e.g. while it is bound as a render target.
    pub fn take(&mut self, key: &str) -> Option<T> {
        self.entries.remove(key)
    }

    /// Put back an entry previously lent out with [`take`](Self::take).
    pub fn restore(&mut self, key: &str, value: T) {
        self.entries.insert(key.to_owned(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for DrawableCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
