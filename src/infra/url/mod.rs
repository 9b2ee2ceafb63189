pub mod page_url;
