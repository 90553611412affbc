//! Hooks for the page-wide effects. Listeners and observers are attached in effects
//! and detached when the owning component unmounts.
use crate::dom::{self, EventListener};
use flexicars_core::{Reveal, RevealConfig, lift_style, nav_scrolled};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

/// Tracks whether the page is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.setter();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            scrolled.set(nav_scrolled(dom::scroll_y(), threshold));
            let listener = EventListener::on_window("scroll", move |_| {
                scrolled.set(nav_scrolled(dom::scroll_y(), threshold));
            });
            move || drop(listener)
        });
    }
    *scrolled
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    node: &NodeRef,
    config: &RevealConfig,
    setter: UseStateSetter<Reveal>,
) -> Option<RevealObserver> {
    let element = node.cast::<Element>()?;
    let mut state = Reveal::Pending;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                state = state.observe(entry.is_intersecting());
                if state.is_revealed() {
                    setter.set(state);
                    observer.unobserve(&entry.target());
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| log::error!("IntersectionObserver failed: {}", dom::js_error_message(&e)))
            .ok()?;
    observer.observe(&element);
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// One-shot entry animation for the element behind `node`.
#[hook]
pub fn use_reveal(node: NodeRef, config: &RevealConfig) -> Reveal {
    let reveal = use_state_eq(Reveal::default);
    {
        let setter = reveal.setter();
        let config = config.clone();
        use_effect_with(node, move |node| {
            let observer = observe_once(node, &config, setter);
            move || drop(observer)
        });
    }
    *reveal
}

/// Inline transform plus the pointer handlers that drive it.
#[derive(Clone, PartialEq)]
pub struct HoverLift {
    pub style: Option<AttrValue>,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover_lift() -> HoverLift {
    let hovered = use_state_eq(|| None::<bool>);
    let onmouseenter = {
        let hovered = hovered.setter();
        Callback::from(move |_: MouseEvent| hovered.set(Some(true)))
    };
    let onmouseleave = {
        let hovered = hovered.setter();
        Callback::from(move |_: MouseEvent| hovered.set(Some(false)))
    };
    HoverLift {
        style: lift_style(*hovered).map(AttrValue::from),
        onmouseenter,
        onmouseleave,
    }
}

/// Log tab visibility changes.
#[hook]
pub fn use_visibility_logging() {
    use_effect_with((), |()| {
        let listener = EventListener::on_document("visibilitychange", |_| {
            let visible = dom::document()
                .is_some_and(|doc| doc.visibility_state() == web_sys::VisibilityState::Visible);
            if visible {
                log::info!("Page is now visible");
            } else {
                log::info!("Page is now hidden");
            }
        });
        move || drop(listener)
    });
}
