pub mod invitee;
pub mod session;
