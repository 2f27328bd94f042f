use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
    /// Stop observing a target after its first intersection.
    pub once: bool,
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
            once: false,
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Root margin that shrinks the viewport by `height` pixels on every side.
pub fn inset_margin(height: f64) -> String {
    format!("-{}px", height.max(0.0).round())
}

// Observer and its JS callback live and die together
struct Subscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn subscribe(
    target: &NodeRef,
    options: &ObserverOptions,
    on_change: Callback<bool>,
) -> Result<Subscription, JsValue> {
    let element = target
        .cast::<Element>()
        .ok_or_else(|| JsValue::from_str("observer target is not mounted"))?;

    let once = options.once;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let visible = entry.is_intersecting();
                if once {
                    if !visible {
                        continue;
                    }
                    observer.unobserve(&entry.target());
                }
                on_change.emit(visible);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);

    Ok(Subscription {
        observer,
        _callback: callback,
    })
}

/// Reports visibility changes of `target` to `on_change`.
///
/// The observer is created after mount, rebuilt when the target or options
/// change, and disconnected on unmount.
#[hook]
pub fn use_intersection(target: NodeRef, options: ObserverOptions, on_change: Callback<bool>) {
    use_effect_with_deps(
        move |(target, options)| {
            let subscription = match subscribe(target, options, on_change) {
                Ok(subscription) => {
                    debug!("Observing element with {:?}", options);
                    Some(subscription)
                }
                Err(err) => {
                    warn!("Could not observe element: {:?}", err);
                    None
                }
            };
            move || drop(subscription)
        },
        (target, options),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let options = ObserverOptions::new(0.15).root_margin("200px").once();
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.root_margin.as_deref(), Some("200px"));
        assert!(options.once);
    }

    #[test]
    fn default_watches_any_overlap() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.root_margin, None);
        assert!(!options.once);
    }

    #[test]
    fn inset_margin_is_negative_pixels() {
        assert_eq!(inset_margin(90.4), "-90px");
        assert_eq!(inset_margin(0.0), "-0px");
        assert_eq!(inset_margin(-5.0), "-0px");
    }
}
