//! Shared wire models for the TeamSpace platform.
//!
//! Everything in this crate mirrors the backend HTTP contract: request and
//! response bodies, the generic response envelope, and the session record
//! the web client persists locally.

pub mod models;
