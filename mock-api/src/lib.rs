//! Stand-in for the restaurant REST API: order listing, status transitions,
//! metrics and the managed restaurant profile over an in-memory store.

pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;
