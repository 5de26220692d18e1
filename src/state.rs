#[derive(Debug, Default)]
pub struct PageState {
    pub menu_open: bool,
    pub last_scroll_top: f64,
    pub styles_injected: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}
