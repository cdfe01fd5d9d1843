use crate::domain::budget::{entities::BudgetResult, value_objects::BudgetProfile};

#[cfg_attr(test, mockall::automock)]
pub trait BudgetService: Send + Sync {
    fn compute_budget(&self, profile: BudgetProfile) -> BudgetResult;
}
