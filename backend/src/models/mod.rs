mod provider;
mod user;

pub use provider::{CreateProvider, Provider};
pub use user::{CreateUser, User};
