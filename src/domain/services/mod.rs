pub mod auth_service;
pub mod roster;
pub mod scanner;
