pub mod page_env;
