pub mod compare_meal;
pub mod generate_copy;
pub mod generate_daily_summary;
pub mod generate_suggestions;
