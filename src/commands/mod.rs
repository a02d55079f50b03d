//! Command implementations

pub mod article;
pub mod check;
pub mod contact;
pub mod home;
pub mod list;
pub mod preview;
