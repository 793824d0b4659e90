//! Result of a list mutation.

/// What a mutator did to its list.
///
/// Mutators never fail outright; a write that could not be persisted is
/// reported as [`Outcome::NotSaved`] and the stored list is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The product was appended and persisted.
    Added,
    /// Matching entries were removed and the remainder persisted.
    Removed,
    /// Nothing matched or the product was already present.
    Unchanged,
    /// The new list could not be written.
    NotSaved,
}

impl Outcome {
    /// Returns false if the write failed.
    #[must_use]
    pub const fn is_saved(self) -> bool {
        !matches!(self, Self::NotSaved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_saved() {
        assert!(Outcome::Added.is_saved());
        assert!(Outcome::Removed.is_saved());
        assert!(Outcome::Unchanged.is_saved());
        assert!(!Outcome::NotSaved.is_saved());
    }
}
