//! Authentication types

mod credential;

pub use credential::Credential;
