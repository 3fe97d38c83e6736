//! Pure decision logic of the ticket lifecycle. Nothing in here performs IO.
pub mod access;
pub mod transition;

pub use transition::{apply_action, Transitionable};
