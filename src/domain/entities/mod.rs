pub mod header;
pub mod ordering;
