//! Optimal production mix for two products sharing two resources.
//!
//! The [`domain`] module holds the solver and the feasible-region sampler;
//! everything else is the HTTP service that feeds them.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod report;
