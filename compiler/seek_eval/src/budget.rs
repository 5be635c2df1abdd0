//! Execution-step budget.

use std::num::NonZeroU64;

/// Upper bound on the number of statements one run may execute.
///
/// Always positive. Every executed statement costs one step, including `if`
/// and `for` headers and each body statement on each iteration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StepBudget(NonZeroU64);

impl StepBudget {
    /// Default budget: 10 000 statements.
    pub const DEFAULT: StepBudget = match NonZeroU64::new(10_000) {
        Some(n) => StepBudget(n),
        None => panic!("default step budget must be positive"),
    };

    /// Create a budget. Returns `None` for zero.
    pub const fn new(limit: u64) -> Option<Self> {
        match NonZeroU64::new(limit) {
            Some(n) => Some(StepBudget(n)),
            None => None,
        }
    }

    pub const fn limit(self) -> u64 {
        self.0.get()
    }
}

impl Default for StepBudget {
    fn default() -> Self {
        StepBudget::DEFAULT
    }
}

/// Running count of steps charged against a budget.
#[derive(Clone, Debug)]
pub(crate) struct StepCounter {
    used: u64,
    limit: u64,
}

impl StepCounter {
    pub(crate) fn new(budget: StepBudget) -> Self {
        StepCounter {
            used: 0,
            limit: budget.limit(),
        }
    }

    /// Charge one step. Returns `false` once the budget is exceeded.
    #[inline]
    pub(crate) fn charge(&mut self) -> bool {
        self.used = self.used.saturating_add(1);
        self.used <= self.limit
    }

    pub(crate) fn used(&self) -> u64 {
        self.used
    }

    pub(crate) fn limit(&self) -> u64 {
        self.limit
    }
}
