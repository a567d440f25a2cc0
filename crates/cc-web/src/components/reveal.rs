use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, window};

/// Check if user prefers reduced motion
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Entrance-animation wrapper: fades/slides its children in the first time
/// they scroll into view, then stops observing. Purely cosmetic; with
/// reduced motion preferred the content is simply shown.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        if prefers_reduced_motion() {
            set_visible.set(true);
            return;
        }

        let Some(el) = node.get() else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        set_visible.set(true);
                        // One-shot: first intersection wins.
                        observer.disconnect();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        if let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            observer.observe(&el);
        }

        // Keep the callback alive for the life of the page
        callback.forget();
    });

    let class_attr = move || {
        let mut classes = String::from("reveal");
        if !class.is_empty() {
            classes.push(' ');
            classes.push_str(&class);
        }
        if visible.get() {
            classes.push_str(" is-visible");
        }
        classes
    };

    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div node_ref=node class=class_attr style=style>
            {children()}
        </div>
    }
}
