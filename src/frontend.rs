use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_console::{error, log};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, ErrorEvent, FormData, HtmlElement, HtmlFormElement, HtmlImageElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Node,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::form::{self, ContactMessage};
use crate::menu::{self, AnchorTarget};
use crate::notify::{self, NotificationCenter, NotificationKind};
use crate::observe::TriggerSet;
use crate::pointer::{self, CursorFollower};
use crate::scroll::{self, SectionSpan, Throttle};
use crate::state::PageState;

const ENTRANCE_STAGGER_MS: u32 = 100;
const PRELOADER_HOLD_MS: u32 = 500;
const PRELOADER_FADE_MS: u32 = 300;
const CARD_DELAY_STEP_S: f64 = 0.1;
const INTERSECT_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const REVEALED_CLASS: &str = "revealed";
const LAZY_SRC_ATTR: &str = "data-src";
const STYLE_HOOK_ATTR: &str = "data-notification-styles";
const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .skill-card, .gallery-item";
const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";
const SKIP_LINK_STYLE: &str = "position: absolute; top: -40px; left: 0; background: #6366f1; \
     color: white; padding: 8px; text-decoration: none; z-index: 10000; transition: top 0.2s;";

struct Hooks {
    navbar: Option<HtmlElement>,
    nav_toggle: Option<HtmlElement>,
    nav_panel: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    contact_form: Option<HtmlFormElement>,
    cursor_dot: Option<HtmlElement>,
    cursor_outline: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl Hooks {
    fn query(document: &Document) -> Self {
        Self {
            navbar: html_by_id(document, "navbar"),
            nav_toggle: html_by_id(document, "navToggle"),
            nav_panel: html_by_id(document, "navLinks"),
            nav_links: query_all_html(document, "[data-nav-link]"),
            back_to_top: html_by_id(document, "backToTop"),
            contact_form: document
                .get_element_by_id("contactForm")
                .and_then(|element| element.dyn_into::<HtmlFormElement>().ok()),
            cursor_dot: query_html(document, "[data-cursor-dot]"),
            cursor_outline: query_html(document, "[data-cursor-outline]"),
            sections: query_all_html(document, "section[id]"),
        }
    }
}

struct ObserverHandle {
    _observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

struct Page {
    window: Window,
    document: Document,
    hooks: Hooks,
    state: RefCell<PageState>,
    scroll_throttle: RefCell<Throttle>,
    parallax_throttle: RefCell<Throttle>,
    notifications: RefCell<NotificationCenter>,
    notification_node: RefCell<Option<Element>>,
    dismiss_timer: RefCell<Option<Timeout>>,
    remove_timer: RefCell<Option<Timeout>>,
    startup_timers: RefCell<Vec<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
    observers: RefCell<Vec<ObserverHandle>>,
    cursor_frame: RefCell<Option<AnimationFrame>>,
    pointer_target: Cell<(f64, f64)>,
    follower: RefCell<CursorFollower>,
    cursor_hovering: Cell<bool>,
}

pub(crate) fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let page = Rc::new(Page::new(window, document));
    page.install();
}

impl Page {
    fn new(window: Window, document: Document) -> Self {
        let hooks = Hooks::query(&document);
        Self {
            window,
            document,
            hooks,
            state: RefCell::new(PageState::new()),
            scroll_throttle: RefCell::new(Throttle::new(scroll::THROTTLE_WINDOW_MS)),
            parallax_throttle: RefCell::new(Throttle::new(scroll::THROTTLE_WINDOW_MS)),
            notifications: RefCell::new(NotificationCenter::new()),
            notification_node: RefCell::new(None),
            dismiss_timer: RefCell::new(None),
            remove_timer: RefCell::new(None),
            startup_timers: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            cursor_frame: RefCell::new(None),
            pointer_target: Cell::new((0.0, 0.0)),
            follower: RefCell::new(CursorFollower::new()),
            cursor_hovering: Cell::new(false),
        }
    }

    // Listener closures capture Rc<Page>, which keeps the page alive for the
    // whole session.
    fn install(self: &Rc<Self>) {
        self.install_scroll();
        self.install_menu();
        self.install_smooth_scroll();
        self.install_back_to_top();
        self.install_reveal();
        self.install_lazy_images();
        self.install_form();
        self.install_cursor();
        self.install_tilt();
        self.install_parallax();
        self.install_entrance_animations();
        self.install_card_delays();
        self.install_footer_year();
        self.install_skip_link();
        self.install_preloader();
        self.install_error_listener();
        self.install_unload_cleanup();
        self.greet_console();
        self.dispatch_scroll();
    }

    fn install_scroll(self: &Rc<Self>) {
        let page = Rc::clone(self);
        let listener = EventListener::new(&self.window, "scroll", move |_event| {
            if page.scroll_throttle.borrow_mut().admit(js_sys::Date::now()) {
                page.dispatch_scroll();
            }
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn dispatch_scroll(&self) {
        let offset = self.window.page_y_offset().unwrap_or(0.0);
        let spans = self.section_spans();
        let directives = {
            let mut state = self.state.borrow_mut();
            scroll::dispatch(&mut state, offset, &spans)
        };
        self.apply_scroll_directives(&directives);
    }

    fn section_spans(&self) -> Vec<SectionSpan> {
        self.hooks
            .sections
            .iter()
            .map(|section| SectionSpan {
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect()
    }

    fn apply_scroll_directives(&self, directives: &scroll::ScrollDirectives) {
        if let Some(navbar) = &self.hooks.navbar {
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", directives.scrolled);
            let _ = navbar
                .style()
                .set_property("transform", directives.navbar.transform());
        }
        if let Some(back_to_top) = &self.hooks.back_to_top {
            let _ = back_to_top
                .class_list()
                .toggle_with_force("show", directives.back_to_top);
        }
        self.highlight_nav_link(directives.active_section);
    }

    fn highlight_nav_link(&self, active: Option<usize>) {
        let Some(index) = active else {
            return;
        };
        let Some(section) = self.hooks.sections.get(index) else {
            return;
        };
        let Some(id) = section.get_attribute("id") else {
            return;
        };

        for link in &self.hooks.nav_links {
            let _ = link.class_list().remove_1("active");
        }
        let selector = format!(".nav-link[href=\"#{id}\"]");
        if let Some(link) = query_html(&self.document, &selector) {
            let _ = link.class_list().add_1("active");
        }
    }

    fn install_menu(self: &Rc<Self>) {
        let (Some(toggle), Some(panel)) = (
            self.hooks.nav_toggle.as_ref(),
            self.hooks.nav_panel.as_ref(),
        ) else {
            return;
        };

        let page = Rc::clone(self);
        let listener = EventListener::new(toggle, "click", move |_event| {
            page.apply_menu_toggle(None);
        });
        self.listeners.borrow_mut().push(listener);

        for link in &self.hooks.nav_links {
            let page = Rc::clone(self);
            let listener = EventListener::new(link, "click", move |_event| {
                page.apply_menu_toggle(Some(false));
            });
            self.listeners.borrow_mut().push(listener);
        }

        let page = Rc::clone(self);
        let toggle = toggle.clone();
        let panel = panel.clone();
        let listener = EventListener::new(&self.document, "click", move |event| {
            let target_node = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            let inside_toggle = target_node
                .as_ref()
                .map(|node| toggle.contains(Some(node)))
                .unwrap_or(false);
            let inside_panel = target_node
                .as_ref()
                .map(|node| panel.contains(Some(node)))
                .unwrap_or(false);

            let close = {
                let state = page.state.borrow();
                menu::should_close_on_document_click(&state, inside_toggle, inside_panel)
            };
            if close {
                page.apply_menu_toggle(Some(false));
            }
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn apply_menu_toggle(&self, explicit: Option<bool>) {
        let open = {
            let mut state = self.state.borrow_mut();
            menu::toggle(&mut state, explicit)
        };
        if let Some(toggle) = &self.hooks.nav_toggle {
            let _ = toggle.class_list().toggle_with_force("active", open);
        }
        if let Some(panel) = &self.hooks.nav_panel {
            let _ = panel.class_list().toggle_with_force("active", open);
        }
        self.set_body_overflow(if open { "hidden" } else { "" });
    }

    fn set_body_overflow(&self, value: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        if value.is_empty() {
            let _ = body.style().remove_property("overflow");
        } else {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn install_smooth_scroll(self: &Rc<Self>) {
        for anchor in query_all_html(&self.document, "a[href^=\"#\"]") {
            let page = Rc::clone(self);
            let href = anchor.get_attribute("href").unwrap_or_default();
            let listener = EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| match menu::anchor_target(&href) {
                    AnchorTarget::PageTop => {
                        event.prevent_default();
                        page.scroll_to_top();
                    }
                    AnchorTarget::Section(selector) => {
                        if let Some(target) = query_html(&page.document, selector) {
                            event.prevent_default();
                            let top = menu::section_scroll_top(f64::from(target.offset_top()));
                            page.smooth_scroll_to(top);
                        }
                    }
                },
            );
            self.listeners.borrow_mut().push(listener);
        }
    }

    fn install_back_to_top(self: &Rc<Self>) {
        let Some(control) = self.hooks.back_to_top.as_ref() else {
            return;
        };
        let page = Rc::clone(self);
        let listener = EventListener::new(control, "click", move |_event| {
            page.scroll_to_top();
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn scroll_to_top(&self) {
        self.smooth_scroll_to(0.0);
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn intersection_supported(&self) -> bool {
        Reflect::has(
            self.window.as_ref(),
            &JsValue::from_str("IntersectionObserver"),
        )
        .unwrap_or(false)
    }

    fn install_reveal(self: &Rc<Self>) {
        self.install_one_shot_observer("[data-scroll-reveal]", Some(REVEAL_ROOT_MARGIN), |target| {
            let _ = target.class_list().add_1(REVEALED_CLASS);
        });
    }

    fn install_lazy_images(self: &Rc<Self>) {
        self.install_one_shot_observer("img[data-src]", None, |target| {
            let Ok(image) = target.dyn_into::<HtmlImageElement>() else {
                return;
            };
            if let Some(src) = image.get_attribute(LAZY_SRC_ATTR) {
                image.set_src(&src);
                let _ = image.remove_attribute(LAZY_SRC_ATTR);
            }
        });
    }

    fn install_one_shot_observer<F>(
        self: &Rc<Self>,
        selector: &str,
        root_margin: Option<&str>,
        on_trigger: F,
    ) where
        F: Fn(Element) + 'static,
    {
        if !self.intersection_supported() {
            return;
        }
        let targets = query_all_elements(&self.document, selector);
        if targets.is_empty() {
            return;
        }

        let targets = Rc::new(targets);
        let triggered = RefCell::new(TriggerSet::with_len(targets.len()));
        let callback_targets = Rc::clone(&targets);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(index) = callback_targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if !triggered.borrow_mut().fire(index) {
                        continue;
                    }
                    observer.unobserve(&target);
                    on_trigger(target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(INTERSECT_THRESHOLD));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        for target in targets.iter() {
            observer.observe(target);
        }
        self.observers.borrow_mut().push(ObserverHandle {
            _observer: observer,
            _callback: callback,
        });
    }

    fn install_form(self: &Rc<Self>) {
        let Some(form) = self.hooks.contact_form.clone() else {
            return;
        };
        let page = Rc::clone(self);
        let handler_form = form.clone();
        let listener = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                page.handle_submit(&handler_form);
            },
        );
        self.listeners.borrow_mut().push(listener);
    }

    fn handle_submit(self: &Rc<Self>, form: &HtmlFormElement) {
        let message = read_contact_message(form);
        if !message.is_complete() {
            self.notify(form::MISSING_FIELDS_MESSAGE, NotificationKind::Error);
            return;
        }

        self.notify(form::SENT_MESSAGE, NotificationKind::Success);
        form.reset();
        // Stub for a real backend: the payload only reaches the console.
        log!("contact form payload:", message.to_log_json());
    }

    fn notify(self: &Rc<Self>, message: &str, kind: NotificationKind) {
        self.ensure_notification_styles();
        self.remove_notification_node();

        self.notifications
            .borrow_mut()
            .show(message, kind, js_sys::Date::now());

        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(node) = self.document.create_element("div") else {
            return;
        };
        {
            let center = self.notifications.borrow();
            let Some(current) = center.current() else {
                return;
            };
            node.set_class_name(&current.kind.css_class());
            node.set_inner_html(&notify::content_markup(&current.message, current.kind));
        }
        if body.append_child(&node).is_err() {
            return;
        }

        *self.notification_node.borrow_mut() = Some(node.clone());
        self.arm_dismiss_timers(node);
    }

    fn ensure_notification_styles(&self) {
        if self.state.borrow().styles_injected {
            return;
        }
        let Some(head) = self.document.head() else {
            return;
        };
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        let _ = style.set_attribute(STYLE_HOOK_ATTR, "");
        style.set_text_content(Some(notify::NOTIFICATION_CSS));
        if head.append_child(&style).is_ok() {
            self.state.borrow_mut().styles_injected = true;
        }
    }

    fn remove_notification_node(&self) {
        self.dismiss_timer.borrow_mut().take();
        self.remove_timer.borrow_mut().take();
        if let Some(node) = self.notification_node.borrow_mut().take() {
            node.remove();
        }
        if let Ok(Some(existing)) = self.document.query_selector(".notification") {
            existing.remove();
        }
        self.notifications.borrow_mut().dismiss();
    }

    fn arm_dismiss_timers(self: &Rc<Self>, node: Element) {
        let page = Rc::clone(self);
        let dismiss = Timeout::new(notify::DISPLAY_MS, move || {
            if let Some(html) = node.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("animation", notify::EXIT_ANIMATION);
            }
            let inner = Rc::clone(&page);
            let remove = Timeout::new(notify::EXIT_MS, move || {
                node.remove();
                inner.notification_node.borrow_mut().take();
                let mut center = inner.notifications.borrow_mut();
                if !center.expire(js_sys::Date::now()) {
                    center.dismiss();
                }
            });
            *page.remove_timer.borrow_mut() = Some(remove);
        });
        *self.dismiss_timer.borrow_mut() = Some(dismiss);
    }

    fn install_cursor(self: &Rc<Self>) {
        if !self.fine_pointer() {
            return;
        }
        let (Some(dot), Some(outline)) = (
            self.hooks.cursor_dot.clone(),
            self.hooks.cursor_outline.clone(),
        ) else {
            return;
        };

        let page = Rc::clone(self);
        let listener = EventListener::new(&self.document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let x = f64::from(event.client_x());
            let y = f64::from(event.client_y());
            page.pointer_target.set((x, y));
            let _ = dot.style().set_property("left", &format!("{x}px"));
            let _ = dot.style().set_property("top", &format!("{y}px"));
        });
        self.listeners.borrow_mut().push(listener);

        for element in query_all_html(&self.document, INTERACTIVE_SELECTOR) {
            let page = Rc::clone(self);
            let enter = EventListener::new(&element, "mouseenter", move |_event| {
                page.cursor_hovering.set(true);
            });
            let page = Rc::clone(self);
            let leave = EventListener::new(&element, "mouseleave", move |_event| {
                page.cursor_hovering.set(false);
            });
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(enter);
            listeners.push(leave);
        }

        self.schedule_cursor_frame(outline);
    }

    fn fine_pointer(&self) -> bool {
        self.window
            .match_media(FINE_POINTER_QUERY)
            .ok()
            .flatten()
            .map(|media| media.matches())
            .unwrap_or(false)
    }

    fn schedule_cursor_frame(self: &Rc<Self>, outline: HtmlElement) {
        let page = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            page.cursor_frame.borrow_mut().take();
            let (target_x, target_y) = page.pointer_target.get();
            let (x, y) = page.follower.borrow_mut().step_toward(target_x, target_y);

            let style = outline.style();
            let _ = style.set_property("left", &format!("{x}px"));
            let _ = style.set_property("top", &format!("{y}px"));
            let _ = style.set_property(
                "transform",
                &pointer::outline_transform(page.cursor_hovering.get()),
            );

            page.schedule_cursor_frame(outline);
        });
        *self.cursor_frame.borrow_mut() = Some(handle);
    }

    fn install_tilt(self: &Rc<Self>) {
        for card in query_all_html(&self.document, ".skill-card") {
            let over = Rc::new(Cell::new(false));

            let enter_flag = Rc::clone(&over);
            let enter = EventListener::new(&card, "mouseenter", move |_event| {
                enter_flag.set(true);
            });

            let move_card = card.clone();
            let move_flag = Rc::clone(&over);
            let movement = EventListener::new(&card, "mousemove", move |event| {
                if !move_flag.get() {
                    return;
                }
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = move_card.get_bounding_client_rect();
                let angles = pointer::tilt_angles(
                    f64::from(event.client_x()) - rect.left(),
                    f64::from(event.client_y()) - rect.top(),
                    rect.width(),
                    rect.height(),
                );
                let _ = move_card
                    .style()
                    .set_property("transform", &pointer::tilt_transform(angles));
            });

            let leave_card = card.clone();
            let leave_flag = Rc::clone(&over);
            let leave = EventListener::new(&card, "mouseleave", move |_event| {
                leave_flag.set(false);
                let _ = leave_card.style().remove_property("transform");
            });

            let mut listeners = self.listeners.borrow_mut();
            listeners.push(enter);
            listeners.push(movement);
            listeners.push(leave);
        }
    }

    fn install_parallax(self: &Rc<Self>) {
        let elements = query_all_html(&self.document, "[data-parallax]");
        if elements.is_empty() {
            return;
        }
        let page = Rc::clone(self);
        let listener = EventListener::new(&self.window, "scroll", move |_event| {
            if !page
                .parallax_throttle
                .borrow_mut()
                .admit(js_sys::Date::now())
            {
                return;
            }
            let offset = page.window.page_y_offset().unwrap_or(0.0);
            for element in &elements {
                let speed = element
                    .get_attribute("data-parallax")
                    .and_then(|raw| raw.parse::<f64>().ok())
                    .unwrap_or(scroll::DEFAULT_PARALLAX_SPEED);
                let shift = scroll::parallax_offset(offset, speed);
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY({shift}px)"));
            }
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn install_entrance_animations(self: &Rc<Self>) {
        let elements = query_all_html(&self.document, "[data-animate]");
        if elements.is_empty() {
            return;
        }
        let page = Rc::clone(self);
        self.when_loaded(move || {
            for (index, element) in elements.into_iter().enumerate() {
                let delay = ENTRANCE_STAGGER_MS * index as u32;
                let timer = Timeout::new(delay, move || {
                    let style = element.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                });
                page.startup_timers.borrow_mut().push(timer);
            }
        });
    }

    fn install_card_delays(&self) {
        for (index, card) in query_all_html(&self.document, ".project-card")
            .into_iter()
            .enumerate()
        {
            let delay = format!("{:.1}s", index as f64 * CARD_DELAY_STEP_S);
            let _ = card.style().set_property("animation-delay", &delay);
        }
    }

    fn install_footer_year(&self) {
        let Some(footer) = query_html(&self.document, ".footer-bottom p:first-child") else {
            return;
        };
        let Some(text) = footer.text_content() else {
            return;
        };
        let year = js_sys::Date::new_0().get_full_year().to_string();
        footer.set_text_content(Some(&text.replace("2024", &year)));
    }

    fn install_skip_link(self: &Rc<Self>) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(link) = self.document.create_element("a") else {
            return;
        };
        let Ok(link) = link.dyn_into::<HtmlElement>() else {
            return;
        };
        let _ = link.set_attribute("href", "#hero");
        link.set_class_name("skip-link");
        link.set_text_content(Some("Skip to main content"));
        let _ = link.set_attribute("style", SKIP_LINK_STYLE);

        let focus_link = link.clone();
        let focus = EventListener::new(&link, "focus", move |_event| {
            let _ = focus_link.style().set_property("top", "0");
        });
        let blur_link = link.clone();
        let blur = EventListener::new(&link, "blur", move |_event| {
            let _ = blur_link.style().set_property("top", "-40px");
        });

        let _ = body.insert_before(&link, body.first_child().as_ref());
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(focus);
        listeners.push(blur);
    }

    fn install_preloader(self: &Rc<Self>) {
        let Some(preloader) = query_html(&self.document, ".preloader") else {
            return;
        };
        let page = Rc::clone(self);
        self.when_loaded(move || {
            let inner_page = Rc::clone(&page);
            let timer = Timeout::new(PRELOADER_HOLD_MS, move || {
                let _ = preloader.style().set_property("opacity", "0");
                let hidden = preloader.clone();
                let hide = Timeout::new(PRELOADER_FADE_MS, move || {
                    let _ = hidden.style().set_property("display", "none");
                });
                inner_page.startup_timers.borrow_mut().push(hide);
            });
            page.startup_timers.borrow_mut().push(timer);
        });
    }

    fn when_loaded(self: &Rc<Self>, action: impl FnOnce() + 'static) {
        if self.document.ready_state() == "complete" {
            action();
            return;
        }
        let listener = EventListener::once(&self.window, "load", move |_event| {
            action();
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn install_error_listener(self: &Rc<Self>) {
        let listener = EventListener::new(&self.window, "error", |event| {
            let message = event
                .dyn_ref::<ErrorEvent>()
                .map(|error| error.message())
                .unwrap_or_else(|| "unknown script error".to_string());
            error!("uncaught error:", message);
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn install_unload_cleanup(self: &Rc<Self>) {
        let page = Rc::clone(self);
        let listener = EventListener::new(&self.window, "beforeunload", move |_event| {
            page.set_body_overflow("");
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn greet_console(&self) {
        log!(
            "%c👋 Hello there!",
            "font-size: 20px; font-weight: bold; color: #6366f1;"
        );
        log!(
            "%cWelcome to my portfolio! Curious about the wiring? It runs on Rust and WebAssembly.",
            "font-size: 12px; color: #64748b;"
        );
    }
}

fn read_contact_message(form: &HtmlFormElement) -> ContactMessage {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactMessage::default();
    };
    ContactMessage {
        name: data.get("name").as_string().unwrap_or_default(),
        email: data.get("email").as_string().unwrap_or_default(),
        message: data.get("message").as_string().unwrap_or_default(),
    }
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn query_all_elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
