mod user;

#[rustfmt::skip]
pub use {
    user::UserRepo,
};
