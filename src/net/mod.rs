//! Networking modules for the identity service and the clan data API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and
//! `error` classifies failures so callers can decide how to degrade.

pub mod api;
pub mod error;
pub mod types;
