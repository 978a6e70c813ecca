pub mod auth;
pub mod health;
pub mod invitee;
pub mod scanner;
