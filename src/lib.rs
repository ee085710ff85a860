//! Lang Portal - study session service for the language learning portal.
//!
//! Learners start timed study sessions against a vocabulary group using a
//! study activity, then record per-word review answers inside them.
//!
//! Layout follows a hexagonal architecture: `domain` holds the value
//! types and errors, `ports` the persistence contracts, `application` the
//! command/query handlers, and `adapters` the SQLite and HTTP edges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
