pub mod user;

#[rustfmt::skip]
pub use {
    user::Role,
    user::User,
};
