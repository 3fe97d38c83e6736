//! 对仓储层的抽象
mod mutable_repository;
mod read_only_repository;

pub use mutable_repository::*;
pub use read_only_repository::*;

use crate::model::AggregateRoot;

/// 对使用数据库仓储的抽象，带有可读仓储和可写仓储
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + AggregateRoot,
{
}

/// Raised by `save_changed` when a guarded write matched no row, i.e. the
/// entity changed since it was loaded.
#[derive(thiserror::Error, Debug)]
#[error("Stale write on {entity} with id: {id}.")]
pub struct StaleWrite {
    pub entity: &'static str,
    pub id: uuid::Uuid,
}
