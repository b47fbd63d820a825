pub mod health;
pub mod translate;
