//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) so individual components
//! can depend on small focused models. Reactive wrappers (`RwSignal`) are
//! provided via context at the application root; the models themselves are
//! plain data so decision logic stays natively testable.

pub mod session;
pub mod toast;
