#![deny(clippy::all, clippy::pedantic)]

pub mod about;
pub mod home;
pub mod posts;
pub mod prefs;
pub mod projects;
