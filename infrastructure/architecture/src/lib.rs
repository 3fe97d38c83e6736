//! Layering primitives shared by the domain, service and infrastructure crates.

pub mod authorization;
pub mod exceptions;
pub mod model;
pub mod repository;
pub mod response;
