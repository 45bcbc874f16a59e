//! folio: typed client and read-through cache for a personal portfolio API.
//!
//! The crate is layered leaves-first: [`client`] speaks HTTP to the REST
//! backend, [`cache`] stores fetched values under typed keys with per-key
//! staleness windows, and [`application`] combines the two into read
//! operations with stale-while-revalidate semantics and mutations that
//! invalidate the affected keys.

pub mod application;
pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod infra;
pub mod prefs;
