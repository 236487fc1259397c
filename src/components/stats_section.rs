//! Stats band with a one-shot count-up animation on first visibility.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::counter::COUNT_UP_FRAME_MS;
use crate::state::counter::{CountUp, StatsState};

/// Animation targets and captions for the stats band.
const STATS: [(u32, &str); 4] = [
    (500, "Happy Clients"),
    (15, "Years of Experience"),
    (30, "Treatments Offered"),
    (1200, "Sessions Booked"),
];

/// Intersection ratio at which the section counts as visible.
#[cfg(feature = "hydrate")]
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Stats section. An IntersectionObserver arms the count-up the first time
/// the section scrolls into view, then unobserves; the animation never
/// re-triggers.
#[component]
pub fn StatsSection() -> impl IntoView {
    let stats = RwSignal::new(StatsState::default());
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let labels = STATS.map(|(target, _)| RwSignal::new(CountUp::new(target).label_at(0)));

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(section) = section_ref.get() else {
                return;
            };
            observe_once(&section, move || {
                let mut armed = false;
                stats.update(|s| armed = s.arm());
                if !armed {
                    return;
                }
                for (label, (target, _)) in labels.iter().copied().zip(STATS) {
                    animate(CountUp::new(target), label);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (stats, section_ref);
        }
    });

    view! {
        <section id="stats" class="stats" node_ref=section_ref>
            <div class="stats__grid">
                {labels
                    .iter()
                    .copied()
                    .zip(STATS)
                    .map(|(label, (_, caption))| {
                        view! {
                            <div class="stat">
                                <span class="stat-number">{move || label.get()}</span>
                                <span class="stat-caption">{caption}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Observe `target` and invoke the callback whenever it becomes visible,
/// unobserving after the first intersection.
#[cfg(feature = "hydrate")]
fn observe_once(target: &web_sys::Element, on_visible: impl Fn() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let listener = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    let threshold = js_sys::Array::of1(&wasm_bindgen::JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_threshold(threshold.as_ref());
    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(listener.as_ref().unchecked_ref(), &options)
    {
        observer.observe(target);
    }
    listener.forget();
}

/// Drive one counter's label from zero to its target on ~16 ms frames.
#[cfg(feature = "hydrate")]
fn animate(counter: CountUp, label: RwSignal<String>) {
    leptos::task::spawn_local(async move {
        let mut elapsed_ms = 0;
        while !counter.is_complete(elapsed_ms) {
            label.set(counter.label_at(elapsed_ms));
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                COUNT_UP_FRAME_MS,
            )))
            .await;
            elapsed_ms += COUNT_UP_FRAME_MS;
        }
        label.set(counter.label_at(elapsed_ms));
    });
}
