pub mod header_service;
pub mod header_sort_controller;
pub mod ordering_codec;
