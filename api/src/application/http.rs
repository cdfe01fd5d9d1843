pub mod budget;
pub mod estimate;
pub mod health;
pub mod llm;
pub mod server;
