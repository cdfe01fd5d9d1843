pub mod compute_budget;
