mod account;
mod token;

#[rustfmt::skip]
pub use {
    account::AccountService,
    token::TokenService,
};
