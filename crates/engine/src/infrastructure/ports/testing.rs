//! Testability port for injecting randomness.

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw from the inclusive range `min..=max`.
    fn gen_range(&self, min: usize, max: usize) -> usize;
}
