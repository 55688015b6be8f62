use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, HtmlIFrameElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use controller::DeferredSource;

use crate::{elements, with_state};

/// Fade-in animator: reveal once, keep observing.
///
/// Elements stay registered after revealing; later notifications find the
/// one-way flag already set and skip the style writes.
pub(crate) fn wire_reveal(document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = target
                    .get_attribute("data-reveal-index")
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                if !with_state(|s| s.borrow_mut().reveal.reveal(index)) {
                    continue;
                }
                let delay = with_state(|s| s.borrow().reveal.delay_ms(index));
                let _ = target.class_list().add_1("visible");
                if let Some(target) = target.dyn_ref::<HtmlElement>() {
                    let _ = target
                        .style()
                        .set_property("transition-delay", &format!("{delay}ms"));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for card in elements(document, &config.selectors.cards) {
        let index = with_state(|s| s.borrow_mut().reveal.register());
        let _ = card.set_attribute("data-reveal-index", &index.to_string());
        observer.observe(&card);
    }
    Ok(())
}

/// Deferred iframes: single-fire observation, in contrast with the reveal
/// animator. The source is assigned at most once, the auxiliary attribute
/// dropped, and the element unobserved on first intersection.
pub(crate) fn wire_lazy_iframes(document: &Document) -> Result<(), JsValue> {
    let config = with_state(|s| s.borrow().config.clone());
    let attr = config.selectors.deferred_src_attr.clone();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let mut deferred = DeferredSource::new(target.get_attribute(&attr));
                if let Some(url) = deferred.take() {
                    if let Some(frame) = target.dyn_ref::<HtmlIFrameElement>() {
                        frame.set_src(&url);
                        let _ = frame.remove_attribute(&attr);
                    }
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.lazy_root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for frame in elements(document, &config.selectors.iframes) {
        observer.observe(&frame);
    }
    Ok(())
}
