//! Folio cache system.
//!
//! A process-wide read-through cache over the portfolio API:
//!
//! - **Keys** name each cacheable resource (scalar for collections and
//!   singletons, `uuid`-composite for single posts/projects).
//! - **Store** holds the last fetched value per key together with its fetch
//!   time and an invalidation flag. Invalidation marks a value as no longer
//!   authoritative without evicting it, so stale-while-revalidate can keep
//!   serving it while a re-fetch is in flight.
//! - **Flight groups** coalesce concurrent identical fetches into a single
//!   network call whose result every caller shares.
//!
//! ## Configuration
//!
//! Staleness windows and capacity limits come from `folio.toml`:
//!
//! ```toml
//! [cache]
//! posts_ttl_secs = 120
//! home_ttl_secs = 300
//! # ... see config.rs for all options
//! ```

mod config;
mod flight;
mod keys;
mod lock;
mod store;

pub use config::CacheConfig;
pub use flight::FlightGroup;
pub use keys::CacheKey;
pub use store::{CacheStore, Entry};
