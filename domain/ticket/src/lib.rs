//! Service-desk ticket domain: claims, intervention requests, equipment
//! associations and work orders, with the pure lifecycle policy that drives
//! their status changes.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod policy;
pub mod repository;
pub mod service;
