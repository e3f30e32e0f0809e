/// Result of a one-time catalog seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The catalog was empty and this many records were inserted.
    Imported(usize),
    /// The catalog already held products; nothing was inserted.
    Skipped,
    /// The catalog size could not be read; nothing was inserted.
    Failed,
}

impl ImportOutcome {
    /// Returns true when this call performed the seed.
    pub fn is_imported(&self) -> bool {
        matches!(self, ImportOutcome::Imported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_imported() {
        assert!(ImportOutcome::Imported(0).is_imported());
        assert!(ImportOutcome::Imported(12).is_imported());
        assert!(!ImportOutcome::Skipped.is_imported());
        assert!(!ImportOutcome::Failed.is_imported());
    }
}
