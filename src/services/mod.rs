pub mod coordinator;
pub mod health;
