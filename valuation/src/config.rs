//! Configuration for valuation building and reduction

/// Configuration for valuation building and reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationConfig {
    /// Validate that components partition the variable set whenever a
    /// composite valuation is assembled
    pub check_partition: bool,
    /// Reject elimination of a variable the valuation does not have,
    /// instead of returning an unchanged copy
    pub strict_elimination: bool,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            check_partition: cfg!(debug_assertions),
            strict_elimination: false,
        }
    }
}

impl ValuationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_checks(mut self, enabled: bool) -> Self {
        self.check_partition = enabled;
        self
    }

    pub fn with_strict_elimination(mut self, enabled: bool) -> Self {
        self.strict_elimination = enabled;
        self
    }

    /// Every check on: partition validation and strict elimination.
    pub fn strict() -> Self {
        Self {
            check_partition: true,
            strict_elimination: true,
        }
    }
}
