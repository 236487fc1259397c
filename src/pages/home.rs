//! Landing page assembling every widget section.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::booking_form::BookingSection;
use crate::components::chat_widget::ChatWidget;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::navbar::Navbar;
use crate::components::stats_section::StatsSection;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::util::scroll;

/// Name and blurb for the services strip.
const SERVICES_OVERVIEW: [(&str, &str); 4] = [
    (
        "Massage Therapy",
        "Swedish, deep tissue, and hot stone sessions tailored to how your week went.",
    ),
    (
        "Facials",
        "Rejuvenating treatments using gentle, fragrance-free product lines.",
    ),
    (
        "Aromatherapy",
        "Essential-oil sessions designed around sleep, focus, or recovery.",
    ),
    (
        "Recovery Packages",
        "Combined treatments for athletes in training or anyone overdue a rest.",
    ),
];

/// The single page of the site: hero, stats, services, testimonials, FAQ,
/// booking, and the floating chat and back-to-top controls.
#[component]
pub fn HomePage() -> impl IntoView {
    let on_hero_cta = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll::scroll_to_anchor("booking");
    };

    view! {
        <div class="home-page">
            <Navbar/>

            <main>
                <section class="hero">
                    <h1>"Unwind. Recover. Repeat."</h1>
                    <p>"Massage, facials, and recovery treatments in the heart of the harbour district."</p>
                    <a href="#booking" class="btn btn--primary hero__cta" on:click=on_hero_cta>
                        "Book an Appointment"
                    </a>
                </section>

                <section id="services" class="services">
                    <h2>"Our Services"</h2>
                    <div class="services__grid">
                        {SERVICES_OVERVIEW
                            .iter()
                            .map(|(name, blurb)| {
                                view! {
                                    <div class="service-card">
                                        <h3>{*name}</h3>
                                        <p>{*blurb}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <StatsSection/>
                <TestimonialCarousel/>
                <FaqAccordion/>
                <BookingSection/>
            </main>

            <footer class="footer">
                <p>"Serene Day Spa \u{00b7} 12 Harbour Street \u{00b7} Open every day 9\u{2013}20"</p>
            </footer>

            <ChatWidget/>
            <BackToTop/>
        </div>
    }
}
