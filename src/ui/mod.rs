pub mod decorators;
pub mod header_row;
pub mod state;
