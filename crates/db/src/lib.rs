//! User records and the stores that hold them.
//!
//! The only backend today is [`store::InMemoryUserStore`]; callers depend on
//! the [`store::UserStore`] trait so a persistent backend can replace it.

pub mod id;
pub mod models;
pub mod seed;
pub mod store;

pub use store::{InMemoryUserStore, UserStore};
