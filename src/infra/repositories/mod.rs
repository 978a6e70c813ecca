pub mod local_invitee_repo;
pub mod remote_invitee_repo;
