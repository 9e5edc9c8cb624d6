use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One observer report for an observed element.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub thresholds: &'static [f64],
}

/// Upper-middle band used to pick the active section: a section counts once
/// its top passes 40% of the viewport and until it passes 50% from the bottom.
pub const SECTION_BAND: ObserverOptions = ObserverOptions {
    root_margin: "-40% 0px -50% 0px",
    thresholds: &[0.0, 0.25, 0.5, 0.75, 1.0],
};

pub const REVEAL_BAND: ObserverOptions = ObserverOptions {
    root_margin: "-10% 0px -10% 0px",
    thresholds: &[0.2],
};

pub fn is_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Where section reports come from. The page reads this from context and
/// falls back to the browser observer when none is provided.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewportSource {
    #[default]
    Browser,
    Feed(IntersectionFeed),
}

/// Reports pushed by the host instead of an `IntersectionObserver`.
#[derive(Clone, Default)]
pub struct IntersectionFeed {
    subscribers: Rc<RefCell<Vec<(usize, Callback<Vec<Intersection>>)>>>,
    next_key: Rc<Cell<usize>>,
}

impl std::fmt::Debug for IntersectionFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntersectionFeed")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl PartialEq for IntersectionFeed {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl IntersectionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, reports: Vec<Intersection>) {
        // Subscribers may drop their subscription while handling a batch.
        let subscribers: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback.emit(reports.clone());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn subscribe(&self, on_report: Callback<Vec<Intersection>>) -> FeedSubscription {
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        self.subscribers.borrow_mut().push((key, on_report));
        FeedSubscription {
            feed: self.clone(),
            key,
        }
    }
}

pub struct FeedSubscription {
    feed: IntersectionFeed,
    key: usize,
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        let key = self.key;
        self.feed.subscribers.borrow_mut().retain(|(k, _)| *k != key);
    }
}

/// Viewport observation, picked once at construction: a live
/// `IntersectionObserver` when the browser has one, a host feed when one is
/// supplied, otherwise nothing.
pub enum ViewportObserver {
    Live(LiveObserver),
    Fed(FeedSubscription),
    Disabled,
}

impl ViewportObserver {
    pub fn from_source(
        source: &ViewportSource,
        options: ObserverOptions,
        on_report: Callback<Vec<Intersection>>,
    ) -> Self {
        match source {
            ViewportSource::Browser => Self::new(options, on_report),
            ViewportSource::Feed(feed) => Self::Fed(feed.subscribe(on_report)),
        }
    }

    pub fn new(options: ObserverOptions, on_report: Callback<Vec<Intersection>>) -> Self {
        if !is_supported() {
            log::debug!("IntersectionObserver unavailable, viewport tracking disabled");
            return Self::Disabled;
        }
        match LiveObserver::new(options, on_report) {
            Ok(live) => Self::Live(live),
            Err(err) => {
                log::warn!("Could not create IntersectionObserver: {:?}", err);
                Self::Disabled
            }
        }
    }

    pub fn observe(&self, target: &Element) {
        if let Self::Live(live) = self {
            live.observer.observe(target);
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

pub struct LiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl LiveObserver {
    fn new(options: ObserverOptions, on_report: Callback<Vec<Intersection>>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let reports = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection::new(entry.target().id(), entry.is_intersecting()))
                .collect();
            on_report.emit(reports);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        let thresholds: js_sys::Array = options
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();
        init.set_threshold(&thresholds);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for LiveObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks whether the referenced node sits inside `options`' band.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserverOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_report = Callback::from(move |reports: Vec<Intersection>| {
                        if let Some(first) = reports.first() {
                            in_view.set(first.is_intersecting);
                        }
                    });
                    let viewport = ViewportObserver::new(options, on_report);
                    viewport.observe(&element);
                    observer = Some(viewport);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}
