pub mod coordinator;
pub mod tracks;
