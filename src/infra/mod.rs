pub mod env;
pub mod url;
