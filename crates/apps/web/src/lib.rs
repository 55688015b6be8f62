use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, ScrollBehavior, ScrollToOptions,
    Window,
};

use controller::{
    ControllerConfig, LandmarkMetrics, QuietPeriod, RevealSequencer, SubmitFeedback,
    active_landmark, fragment_id, progress_percent, scroll_target_y,
};

mod observers;

// Guard against double-initialization (repeated init calls, hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Delay before the body fades back in on the window load event.
const FADE_IN_DELAY_MS: i32 = 100;

const BANNER_STYLE: &str = "background: linear-gradient(135deg, #00ff88, #00ccff); \
     color: #0a0a0a; font-weight: bold; padding: 4px 12px; border-radius: 4px;";

/// Page-scoped controller state shared by the event closures.
///
/// Event listener closures themselves are leaked (`Closure::forget`): they
/// live for the page. The one exception is the resize debounce closure,
/// which is replaced on every resize event and must stay owned here so the
/// cancelled timer's callback can be dropped.
pub(crate) struct PageState {
    pub(crate) config: ControllerConfig,
    pub(crate) reveal: RevealSequencer,
    pub(crate) resize: QuietPeriod,
    pub(crate) feedback: SubmitFeedback,
    /// Parallax width-gate outcome at load; a later flip triggers a reload.
    pub(crate) parallax_at_load: bool,
    pub(crate) resize_timer: Option<i32>,
    pub(crate) resize_closure: Option<Closure<dyn FnMut()>>,
}

impl PageState {
    fn from_config(config: ControllerConfig) -> Self {
        let reveal = RevealSequencer::new(config.reveal.stagger_ms);
        let resize = QuietPeriod::new(config.resize_quiet_ms as f64);
        let feedback = SubmitFeedback::new(config.busy_label.clone(), config.idle_label.clone());
        Self {
            config,
            reveal,
            resize,
            feedback,
            parallax_at_load: true,
            resize_timer: None,
            resize_closure: None,
        }
    }
}

thread_local! {
    static STATE: RefCell<PageState> =
        RefCell::new(PageState::from_config(ControllerConfig::default()));
}

pub(crate) fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<PageState>) -> R,
    R: Default,
{
    STATE.try_with(f).unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/// Wires every page behavior with the default selector contract.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    init_inner(ControllerConfig::default())
}

/// Same as [`init`], with JSON overrides for any subset of the config.
#[wasm_bindgen]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    let config =
        ControllerConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    init_inner(config)
}

fn init_inner(config: ControllerConfig) -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    with_state(|state| {
        *state.borrow_mut() = PageState::from_config(config);
    });

    let window = window()?;
    let document = document(&window)?;

    wire_smooth_scroll(&window, &document)?;
    wire_scroll_spy(&window, &document)?;
    wire_progress_bar(&window, &document)?;
    wire_parallax(&window, &document)?;
    observers::wire_reveal(&document)?;
    observers::wire_lazy_iframes(&document)?;
    wire_form_feedback(&window, &document)?;
    wire_social_hover(&document)?;
    wire_context_menu_guard(&document)?;
    wire_page_fade_in(&window, &document)?;
    wire_resize_reload(&window)?;
    prime_card_transitions(&document)?;

    web_sys::console::log_2(
        &JsValue::from_str("%c portfolio "),
        &JsValue::from_str(BANNER_STYLE),
    );
    web_sys::console::log_1(&JsValue::from_str("scroll controller wired"));
    Ok(())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn page_y_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// All elements matching `selector`. A selector that matches nothing is not
/// an error; the affected feature just has nothing to do.
pub(crate) fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(element);
            }
        }
    }
    out
}

/// Same-page nav links: cancel the hard jump, animate to the target offset
/// compensated for the fixed header. Unknown targets are a no-op.
fn wire_smooth_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    for link in elements(document, &config.selectors.nav_links) {
        let window = window.clone();
        let document = document.clone();
        let header_offset = config.header_offset_px;
        let link_ref = link.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let Some(href) = link_ref.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let top = scroll_target_y(
                target.get_bounding_client_rect().top(),
                page_y_offset(&window),
                header_offset,
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }) as Box<dyn FnMut(Event)>);
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Re-derives the active nav link on every scroll event: clear all flags,
/// set the one matching the last landmark past its activation point.
fn wire_scroll_spy(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    let sections = elements(document, &config.selectors.sections);
    let links = elements(document, &config.selectors.nav_links);
    let threshold = config.spy_threshold_px;
    let window_ref = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = page_y_offset(&window_ref);
        // Element handles are cached; offsets are re-read every pass.
        let mut landmarks = Vec::with_capacity(sections.len());
        for section in &sections {
            let Some(id) = section.get_attribute("id") else {
                continue;
            };
            let top = section
                .dyn_ref::<HtmlElement>()
                .map(|el| el.offset_top() as f64)
                .unwrap_or(0.0);
            landmarks.push(LandmarkMetrics::new(id, top, section.client_height() as f64));
        }
        let active_id =
            active_landmark(scroll_y, &landmarks, threshold).map(|i| landmarks[i].id.clone());
        for link in &links {
            let list = link.class_list();
            let _ = list.remove_1("active");
            let matches = link
                .get_attribute("href")
                .as_deref()
                .and_then(fragment_id)
                .is_some_and(|id| Some(id) == active_id.as_deref());
            if matches {
                let _ = list.add_1("active");
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn wire_progress_bar(window: &Window, document: &Document) -> Result<(), JsValue> {
    let bar = create_progress_bar(document)?;
    let window_ref = window.clone();
    let document_ref = document.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let Some(root) = document_ref.document_element() else {
            return;
        };
        let percent = progress_percent(
            page_y_offset(&window_ref),
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn create_progress_bar(document: &Document) -> Result<HtmlElement, JsValue> {
    let bar = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    let style = bar.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "0%")?;
    style.set_property("height", "3px")?;
    style.set_property("background", "linear-gradient(135deg, #00ff88, #00ccff)")?;
    style.set_property("z-index", "10000")?;
    style.set_property("transition", "width 0.1s")?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&bar)?;
    Ok(bar)
}

/// Layered drift for the decorative shapes. Below the width gate the scroll
/// listener is never registered at all.
fn wire_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    let enabled = config.parallax.enabled(viewport_width(window));
    with_state(|state| state.borrow_mut().parallax_at_load = enabled);
    if !enabled {
        return Ok(());
    }
    let shapes: Vec<HtmlElement> = elements(document, &config.selectors.shapes)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let profile = config.parallax;
    let window_ref = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = page_y_offset(&window_ref);
        for (index, shape) in shapes.iter().enumerate() {
            let offset = profile.offset_y(scroll_y, index);
            let _ = shape
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Busy label + disabled submit while the external form backend does its
/// work; restored by a fixed timer, one per submission. The backend's
/// response is never observed.
fn wire_form_feedback(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    let Some(form) = document.query_selector(&config.selectors.contact_form)? else {
        return Ok(());
    };
    let window_ref = window.clone();
    let submit_selector = config.selectors.submit_button.clone();
    let restore_ms = config.form_restore_ms;
    let form_ref = form.clone();
    let on_submit = Closure::wrap(Box::new(move |_event: Event| {
        let Ok(Some(button)) = form_ref.query_selector(&submit_selector) else {
            return;
        };
        let Ok(button) = button.dyn_into::<HtmlButtonElement>() else {
            return;
        };
        let busy = with_state(|s| s.borrow_mut().feedback.begin().to_string());
        button.set_text_content(Some(&busy));
        button.set_disabled(true);

        let restore_button = button.clone();
        let on_restore = Closure::wrap(Box::new(move || {
            let idle = with_state(|s| s.borrow().feedback.restore().to_string());
            restore_button.set_text_content(Some(&idle));
            restore_button.set_disabled(false);
        }) as Box<dyn FnMut()>);
        let _ = window_ref.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_restore.as_ref().unchecked_ref(),
            restore_ms as i32,
        );
        on_restore.forget();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

fn wire_social_hover(document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    for link in elements(document, &config.selectors.social_links) {
        let Ok(link) = link.dyn_into::<HtmlElement>() else {
            continue;
        };
        let enter_target = link.clone();
        let on_enter = Closure::wrap(Box::new(move || {
            let _ = enter_target
                .style()
                .set_property("transform", "translateY(-3px) scale(1.1)");
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
        on_enter.forget();

        let leave_target = link.clone();
        let on_leave = Closure::wrap(Box::new(move || {
            let _ = leave_target
                .style()
                .set_property("transform", "translateY(0) scale(1)");
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

/// Suppress the context menu on images only; every other target keeps the
/// native menu.
fn wire_context_menu_guard(document: &Document) -> Result<(), JsValue> {
    let on_context_menu = Closure::wrap(Box::new(move |event: Event| {
        let is_image = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("img"));
        if is_image {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback(
        "contextmenu",
        on_context_menu.as_ref().unchecked_ref(),
    )?;
    on_context_menu.forget();
    Ok(())
}

fn wire_page_fade_in(window: &Window, document: &Document) -> Result<(), JsValue> {
    let window_ref = window.clone();
    let document_ref = document.clone();
    let on_load = Closure::wrap(Box::new(move || {
        let Some(body) = document_ref.body() else {
            return;
        };
        let _ = body.style().set_property("opacity", "0");
        let fade_body = body.clone();
        let on_fade = Closure::wrap(Box::new(move || {
            let _ = fade_body.style().set_property("transition", "opacity 0.5s");
            let _ = fade_body.style().set_property("opacity", "1");
        }) as Box<dyn FnMut()>);
        let _ = window_ref.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_fade.as_ref().unchecked_ref(),
            FADE_IN_DELAY_MS,
        );
        on_fade.forget();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

/// Debounced resize: every event cancels the pending timer; after a full
/// quiet period the parallax width gate is re-evaluated, and a flip relative
/// to load reloads the page so listener registration matches the layout.
fn wire_resize_reload(window: &Window) -> Result<(), JsValue> {
    let window_ref = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let now = js_sys::Date::now();
        with_state(|state| {
            let mut s = state.borrow_mut();
            s.resize.record_event(now);
            if let Some(timer) = s.resize_timer.take() {
                window_ref.clear_timeout_with_handle(timer);
            }
        });

        let quiet_ms = with_state(|s| s.borrow().config.resize_quiet_ms);
        let fire_window = window_ref.clone();
        let on_quiet = Closure::wrap(Box::new(move || {
            if !with_state(|s| s.borrow_mut().resize.poll(js_sys::Date::now())) {
                return;
            }
            let (profile, at_load) = with_state(|s| {
                let s = s.borrow();
                (s.config.parallax, s.parallax_at_load)
            });
            if profile.enabled(viewport_width(&fire_window)) != at_load {
                let _ = fire_window.location().reload();
            }
        }) as Box<dyn FnMut()>);
        let timer = window_ref
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_quiet.as_ref().unchecked_ref(),
                quiet_ms as i32,
            )
            .unwrap_or(0);
        with_state(|state| {
            let mut s = state.borrow_mut();
            s.resize_timer = Some(timer);
            s.resize_closure = Some(on_quiet);
        });
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

/// Install the transition the reveal class change animates through.
fn prime_card_transitions(document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    for card in elements(document, &config.selectors.cards) {
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            card.style()
                .set_property("transition", "opacity 0.6s ease-out, transform 0.6s ease-out")?;
        }
    }
    Ok(())
}
