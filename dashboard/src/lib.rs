//! Client core of the restaurant dashboard: the order status engine, its
//! order-list cache, the REST client and the display models built on them.

pub mod api;
pub mod config;
pub mod display;
pub mod engine;
pub mod entities;
pub mod errors;
pub mod repositories;
