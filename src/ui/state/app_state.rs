use dioxus::prelude::{use_signal, Signal};

pub const DEMO_PAGE_ADDRESS: &str = "http://localhost/books/?q=&page=1";

pub struct AppState {
    pub page_address: Signal<String>,
    pub visits: Signal<Vec<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page_address: use_signal(|| DEMO_PAGE_ADDRESS.to_string()),
            visits: use_signal(Vec::<String>::new),
        }
    }
}
