//! LIFO store of pending work for one algorithm instance.
//!
//! Driving a stack until it is empty is the same as running the algorithm that seeded it to
//! completion. Depth is unbounded, in practice it follows the recursion depth of the algorithm.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationStack<K> {
    frames: Vec<K>,
}

impl<K> ContinuationStack<K> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Creates a stack holding only `entry`.
    pub fn seeded(entry: K) -> Self {
        Self {
            frames: vec![entry],
        }
    }

    #[inline]
    pub fn push(&mut self, continuation: K) {
        self.frames.push(continuation);
    }

    /// Removes the most recently pushed continuation, `None` if there is nothing left to do.
    #[inline]
    pub fn pop(&mut self) -> Option<K> {
        self.frames.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<K> Default for ContinuationStack<K> {
    fn default() -> Self {
        Self::new()
    }
}
