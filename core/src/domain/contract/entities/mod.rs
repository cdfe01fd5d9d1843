pub mod daily_summary;
pub mod food_estimate;
pub mod meal_comparison;
pub mod reminder_copy;
pub mod suggestion_set;

pub use daily_summary::*;
pub use food_estimate::*;
pub use meal_comparison::*;
pub use reminder_copy::*;
pub use suggestion_set::*;
