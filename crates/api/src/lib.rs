//! HTTP API for the course video platform.
//!
//! Public viewer endpoints expose subjects and their videos; admin
//! endpoints behind a JWT guard provide CRUD over both.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
