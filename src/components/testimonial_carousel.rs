//! Responsive testimonial carousel with saturating prev/next paging.

use leptos::prelude::*;

use crate::state::carousel::CarouselState;
use crate::util::viewport;

/// Quote, client name, and caption for each testimonial card.
const TESTIMONIALS: [(&str, &str, &str); 6] = [
    (
        "The hot stone massage was the best I've ever had. I walked out feeling ten years younger.",
        "Maria Jensen",
        "Regular since 2021",
    ),
    (
        "Booking online took under a minute and the calendar made picking a slot painless.",
        "Tom Okafor",
        "First-time visitor",
    ),
    (
        "Quiet rooms, warm towels, and staff who remember your name. This place gets it right.",
        "Priya Natarajan",
        "Monthly member",
    ),
    (
        "I came in with a stiff shoulder and left without it. The deep tissue session is worth every penny.",
        "Jakob Lindqvist",
        "Amateur climber",
    ),
    (
        "My go-to spot before every race season. The recovery packages are fantastic.",
        "Sofia Reyes",
        "Marathon runner",
    ),
    (
        "A friend recommended the aromatherapy session and now I recommend it to everyone.",
        "Ellen Park",
        "Regular since 2023",
    ),
];

/// Paged testimonial strip. Cards-per-view follows the viewport breakpoints;
/// crossing a breakpoint on resize resets paging to the start.
#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len(), viewport::width()));

    Effect::new(move || {
        viewport::bind_resize_listener(move |width_px| {
            carousel.update(|c| {
                c.on_resize(width_px);
            });
        });
    });

    let track_style = move || {
        format!(
            "transform: translateX({}%)",
            carousel.get().track_offset_percent()
        )
    };
    let card_style = move || format!("flex: 0 0 {}%", carousel.get().card_width_percent());

    let on_prev = move |_| carousel.update(CarouselState::prev);
    let on_next = move |_| carousel.update(CarouselState::next);

    view! {
        <section id="testimonials" class="testimonials">
            <h2>"What Our Clients Say"</h2>
            <div class="testimonials__viewport">
                <div class="testimonial-carousel" style=track_style>
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, name, caption)| {
                            view! {
                                <figure class="testimonial-card" style=card_style>
                                    <blockquote>{*quote}</blockquote>
                                    <figcaption>
                                        <span class="testimonial-card__name">{*name}</span>
                                        <span class="testimonial-card__caption">{*caption}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="testimonials__controls">
                <button class="prev-btn" aria-label="Previous testimonials" on:click=on_prev>
                    "\u{2190}"
                </button>
                <button class="next-btn" aria-label="Next testimonials" on:click=on_next>
                    "\u{2192}"
                </button>
            </div>
        </section>
    }
}
