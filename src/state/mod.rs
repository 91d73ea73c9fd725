//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the soft, feature-flag view of the signed-in user; `gate` is
//! the hard staging access decision. They share one remote call shape but
//! apply different policies to its result.

pub mod gate;
pub mod session;
