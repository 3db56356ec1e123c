use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::SiteError;
use crate::state::reveal::RevealState;
use crate::state::section::{ActiveSection, SectionEntry, SectionId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl ObserverOptions {
    /// Fires once a tenth of the element is on screen.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: None,
    };

    /// Shrinks the viewport to the horizontal line through its middle.
    pub const MIDPOINT_BAND: Self = Self {
        threshold: 0.0,
        root_margin: Some("-50% 0px -50% 0px"),
    };
}

pub struct ViewportEntry {
    pub target: Element,
    pub is_intersecting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// Owns a browser `IntersectionObserver` and the closure it calls.
/// Dropping it disconnects every watched element.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new<F>(options: ObserverOptions, mut on_entry: F) -> Result<Self, SiteError>
    where
        F: FnMut(&ViewportEntry) -> Watch + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let entry = ViewportEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    };
                    if on_entry(&entry) == Watch::Stop {
                        observer.unobserve(&entry.target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(SiteError::observer)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced element has scrolled into view. Stays true.
/// With `enabled` false nothing is watched and the result stays false.
#[hook]
pub fn use_reveal(node: NodeRef, enabled: bool) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let on_reveal = {
            let revealed = revealed.clone();
            Callback::from(move |_: ()| revealed.set(true))
        };
        use_effect_with_deps(
            move |(node, enabled): &(NodeRef, bool)| {
                let observer = node
                    .cast::<Element>()
                    .filter(|_| *enabled)
                    .and_then(|element| watch_reveal(&element, on_reveal));
                move || drop(observer)
            },
            (node, enabled),
        );
    }

    *revealed
}

fn watch_reveal(element: &Element, on_reveal: Callback<()>) -> Option<ViewportObserver> {
    let mut state = RevealState::new();
    let observer = ViewportObserver::new(ObserverOptions::REVEAL, move |entry| {
        if state.observe(entry.is_intersecting) {
            on_reveal.emit(());
            Watch::Stop
        } else {
            Watch::Continue
        }
    });

    match observer {
        Ok(observer) => {
            observer.observe(element);
            Some(observer)
        }
        Err(err) => {
            warn!("Reveal animation disabled: {}", err);
            None
        }
    }
}

/// Tracks which section sits under the viewport midpoint.
#[hook]
pub fn use_active_section() -> SectionId {
    let tracker = use_reducer(ActiveSection::default);

    {
        let dispatcher = tracker.dispatcher();
        let on_entry = Callback::from(move |entry: SectionEntry| dispatcher.dispatch(entry));
        use_effect_with_deps(
            move |_| {
                let observers = watch_sections(on_entry);
                info!("Watching {} sections for navigation", observers.len());
                move || drop(observers)
            },
            (),
        );
    }

    tracker.current()
}

fn document() -> Result<web_sys::Document, SiteError> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}

fn watch_sections(on_entry: Callback<SectionEntry>) -> Vec<ViewportObserver> {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            warn!("Section tracking disabled: {}", err);
            return Vec::new();
        }
    };

    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id())?;
            let on_entry = on_entry.clone();
            let observer = ViewportObserver::new(ObserverOptions::MIDPOINT_BAND, move |entry| {
                on_entry.emit(SectionEntry {
                    section,
                    is_intersecting: entry.is_intersecting,
                });
                Watch::Continue
            });
            match observer {
                Ok(observer) => {
                    observer.observe(&element);
                    Some(observer)
                }
                Err(err) => {
                    warn!("Not tracking section {}: {}", section, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Intersection callbacks arrive asynchronously, after a frame or two.
    async fn settle() {
        TimeoutFuture::new(150).await;
    }

    fn mount(id: &str) -> Element {
        let document = document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_id(id);
        element
            .set_attribute("style", "display: block; width: 200px; height: 200px;")
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn set_hidden(element: &Element, hidden: bool) {
        let display = if hidden { "none" } else { "block" };
        element
            .set_attribute(
                "style",
                &format!("display: {}; width: 200px; height: 200px;", display),
            )
            .unwrap();
    }

    fn counting_observer(watch: Watch) -> (ViewportObserver, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let observer = {
            let calls = calls.clone();
            ViewportObserver::new(ObserverOptions::REVEAL, move |_| {
                calls.set(calls.get() + 1);
                watch
            })
            .unwrap()
        };
        (observer, calls)
    }

    #[wasm_bindgen_test]
    async fn stop_unobserves_the_target() {
        let element = mount("stop-target");
        let (observer, calls) = counting_observer(Watch::Stop);
        observer.observe(&element);
        settle().await;
        assert_eq!(calls.get(), 1);

        set_hidden(&element, true);
        settle().await;
        set_hidden(&element, false);
        settle().await;
        assert_eq!(calls.get(), 1);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn continue_keeps_watching() {
        let element = mount("continue-target");
        let (observer, calls) = counting_observer(Watch::Continue);
        observer.observe(&element);
        settle().await;
        assert_eq!(calls.get(), 1);

        set_hidden(&element, true);
        settle().await;
        assert!(calls.get() >= 2);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn drop_disconnects() {
        let element = mount("dropped-target");
        let (observer, calls) = counting_observer(Watch::Continue);
        observer.observe(&element);
        settle().await;
        assert_eq!(calls.get(), 1);

        drop(observer);
        set_hidden(&element, true);
        settle().await;
        set_hidden(&element, false);
        settle().await;
        assert_eq!(calls.get(), 1);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn reveal_fires_once() {
        let element = mount("reveal-target");
        let reveals = Rc::new(Cell::new(0));
        let on_reveal = {
            let reveals = reveals.clone();
            Callback::from(move |_: ()| reveals.set(reveals.get() + 1))
        };
        let observer = watch_reveal(&element, on_reveal);
        assert!(observer.is_some());
        settle().await;
        assert_eq!(reveals.get(), 1);

        set_hidden(&element, true);
        settle().await;
        set_hidden(&element, false);
        settle().await;
        assert_eq!(reveals.get(), 1);
        element.remove();
    }

    #[wasm_bindgen_test]
    fn missing_sections_are_skipped() {
        let about = mount(SectionId::About.id());
        let gallery = mount(SectionId::Gallery.id());

        let observers = watch_sections(Callback::noop());
        assert_eq!(observers.len(), 2);

        drop(observers);
        about.remove();
        gallery.remove();
    }
}
