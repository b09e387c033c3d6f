pub mod detect;
pub mod health;
