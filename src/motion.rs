use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{MediaQueryList, Window};
use yew::prelude::*;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Mirrors the system "reduce motion" setting for the lifetime of the
/// component. Browsers without `matchMedia` report `false`.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let prefers_reduced = use_state(|| false);

    {
        let prefers_reduced = prefers_reduced.clone();
        use_effect_with_deps(
            move |_| {
                let on_change = Callback::from(move |matches: bool| prefers_reduced.set(matches));
                let subscription = web_sys::window().and_then(|window| watch_reduced_motion(&window, on_change));
                move || drop(subscription)
            },
            (),
        );
    }

    *prefers_reduced
}

/// Environment that can evaluate media queries. `None` means the capability
/// itself is missing.
pub trait MediaQueryEnv {
    type List: MediaQuerySource;

    fn match_media(&self, query: &str) -> Option<Self::List>;
}

pub trait MediaQuerySource: Clone + 'static {
    /// Keeps the change handler registered until dropped.
    type Subscription;

    fn matches(&self) -> bool;
    fn subscribe(&self, on_change: Box<dyn FnMut()>) -> Self::Subscription;
}

/// Reports the current reduced-motion state, then again on every change.
pub fn watch_reduced_motion<E: MediaQueryEnv>(
    env: &E,
    on_change: Callback<bool>,
) -> Option<<E::List as MediaQuerySource>::Subscription> {
    let Some(list) = env.match_media(REDUCED_MOTION_QUERY) else {
        on_change.emit(false);
        return None;
    };
    on_change.emit(list.matches());

    let watched = list.clone();
    Some(list.subscribe(Box::new(move || on_change.emit(watched.matches()))))
}

/// Registration side of a media query list: the standard `change` event and
/// the older `addListener` API.
pub trait ChangeListeners {
    type Handler: ?Sized;

    fn add_change_listener(&self, handler: &Self::Handler) -> bool;
    fn add_legacy_listener(&self, handler: &Self::Handler);
}

/// Registers `handler`, returning `true` when only the legacy API took it.
pub fn attach_change_listener<T: ChangeListeners>(target: &T, handler: &T::Handler) -> bool {
    if target.add_change_listener(handler) {
        return false;
    }
    target.add_legacy_listener(handler);
    true
}

impl ChangeListeners for MediaQueryList {
    type Handler = js_sys::Function;

    fn add_change_listener(&self, handler: &js_sys::Function) -> bool {
        self.add_event_listener_with_callback("change", handler).is_ok()
    }

    fn add_legacy_listener(&self, handler: &js_sys::Function) {
        #[allow(deprecated)]
        let _ = self.add_listener_with_opt_callback(Some(handler));
    }
}

impl MediaQueryEnv for Window {
    type List = MediaQueryList;

    fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        let supported = js_sys::Reflect::get(self, &JsValue::from_str("matchMedia"))
            .map(|f| f.is_function())
            .unwrap_or(false);
        if !supported {
            return None;
        }
        Window::match_media(self, query).ok().flatten()
    }
}

impl MediaQuerySource for MediaQueryList {
    type Subscription = MediaQueryListener;

    fn matches(&self) -> bool {
        MediaQueryList::matches(self)
    }

    fn subscribe(&self, on_change: Box<dyn FnMut()>) -> MediaQueryListener {
        let callback = Closure::wrap(on_change);
        // Older Safari only exposes addListener on MediaQueryList.
        let legacy = attach_change_listener(self, callback.as_ref().unchecked_ref());
        MediaQueryListener {
            list: self.clone(),
            callback,
            legacy,
        }
    }
}

pub struct MediaQueryListener {
    list: MediaQueryList,
    callback: Closure<dyn FnMut()>,
    legacy: bool,
}

impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        if self.legacy {
            #[allow(deprecated)]
            let _ = self.list.remove_listener_with_opt_callback(Some(function));
        } else {
            let _ = self.list.remove_event_listener_with_callback("change", function);
        }
    }
}

/// Reduced-motion preference shared from the page down to reveal wrappers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}
