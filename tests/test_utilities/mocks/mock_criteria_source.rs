use deptrace::prelude::*;
use std::cell::{Cell, RefCell};

/// Mock FilterCriteriaSource whose criteria can change between runs
pub struct MockCriteriaSource {
    criteria: RefCell<FilterCriteria>,
    calls: Cell<usize>,
    should_fail: bool,
}

impl MockCriteriaSource {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria: RefCell::new(criteria),
            calls: Cell::new(0),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            criteria: RefCell::new(FilterCriteria::new()),
            calls: Cell::new(0),
            should_fail: true,
        }
    }

    /// Simulates the user editing the filter between two runs
    pub fn set(&self, criteria: FilterCriteria) {
        *self.criteria.borrow_mut() = criteria;
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl FilterCriteriaSource for &MockCriteriaSource {
    fn current_criteria(&self) -> Result<FilterCriteria> {
        self.calls.set(self.calls.get() + 1);
        if self.should_fail {
            anyhow::bail!("Mock criteria read failure");
        }
        Ok(self.criteria.borrow().clone())
    }
}
