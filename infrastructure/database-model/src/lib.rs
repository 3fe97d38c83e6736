pub mod system;

pub use sea_orm;
