pub mod budget;
pub mod common;
pub mod contract;
pub mod health;
