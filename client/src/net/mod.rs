//! Networking modules for the external rating API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and attaches the session's bearer token;
//! `types` defines the wire schema and the client-side validation rules.

pub mod api;
pub mod types;
