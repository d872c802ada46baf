//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Access control is applied in the route table
//! (`app.rs`) by wrapping protected pages in `Protected`.

pub mod about;
pub mod ai_writer;
pub mod become_creator;
pub mod contact;
pub mod creator_dashboard;
pub mod dashboard;
pub mod homepage;
pub mod invoice_builder;
pub mod letter_builder;
pub mod login;
pub mod not_found;
pub mod register;
pub mod resume_builder;
pub mod template_detail;
pub mod templates;
pub mod user_profile;
