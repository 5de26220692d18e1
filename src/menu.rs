use crate::state::PageState;

pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnchorTarget<'a> {
    PageTop,
    Section(&'a str),
}

pub fn toggle(state: &mut PageState, explicit: Option<bool>) -> bool {
    let open = explicit.unwrap_or(!state.menu_open);
    state.menu_open = open;
    open
}

pub fn should_close_on_document_click(
    state: &PageState,
    inside_toggle: bool,
    inside_panel: bool,
) -> bool {
    state.menu_open && !inside_toggle && !inside_panel
}

pub fn anchor_target(href: &str) -> AnchorTarget<'_> {
    match href {
        "#" | "#hero" => AnchorTarget::PageTop,
        other => AnchorTarget::Section(other),
    }
}

pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}
