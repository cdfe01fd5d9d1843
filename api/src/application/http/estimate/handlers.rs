pub mod estimate_food;
