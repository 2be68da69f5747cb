//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and formatting concerns from page
//! and component logic so they can be tested without a DOM.

pub mod format;
pub mod session_store;
pub mod validation;
