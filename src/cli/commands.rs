pub mod login;
pub mod search;
