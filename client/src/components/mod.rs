//! Reusable UI components shared by the pages.

pub mod account_header;
pub mod form_notice;
pub mod logout_button;
pub mod password_dialog;
pub mod role_select;
pub mod route_gate;
pub mod stars;
pub mod text_field;
