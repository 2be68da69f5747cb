//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `auth` carry who the visitor is; the rest is page-scoped
//! request state held in `RwSignal`s by the pages that own it.

pub mod admin;
pub mod auth;
pub mod form;
pub mod loadable;
pub mod ratings;
pub mod search;
pub mod session;
