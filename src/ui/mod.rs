//! Screens of the client, one MVI module per screen.

pub mod about;
pub mod details;
pub mod home;
pub mod mvi;
