mod account;
mod password;
mod token;

pub use account::AccountServiceImpl;
pub use token::JwtTokenServiceImpl;
