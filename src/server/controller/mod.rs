pub mod home;
pub mod interaction;
