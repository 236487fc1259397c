//! FAQ accordion; entries expand and collapse independently.

use leptos::prelude::*;

use crate::state::faq::FaqState;

const FAQS: [(&str, &str); 5] = [
    (
        "Do I need to book in advance?",
        "Walk-ins are welcome when a room is free, but booking a day or two ahead guarantees your preferred time slot.",
    ),
    (
        "What should I bring to my first appointment?",
        "Just yourself. Towels, robes, and lockers are provided; arrive ten minutes early to fill in a short intake form.",
    ),
    (
        "Can I cancel or reschedule?",
        "Yes, up to 24 hours before your appointment at no charge. Later changes are billed at half the session rate.",
    ),
    (
        "Do you offer gift cards?",
        "Gift cards are available at reception for any amount or for a specific treatment, and they never expire.",
    ),
    (
        "Is parking available?",
        "Free parking is available behind the building, and the tram stops a block away on Harbour Street.",
    ),
];

/// Accordion of frequently asked questions. Each answer toggles on its own;
/// opening one never closes the others.
#[component]
pub fn FaqAccordion() -> impl IntoView {
    let faq = RwSignal::new(FaqState::new(FAQS.len()));

    view! {
        <section id="faq" class="faq">
            <h2>"Frequently Asked Questions"</h2>
            <div class="faq__list">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        let item_class = move || {
                            if faq.get().is_open(index) {
                                "faq-item active"
                            } else {
                                "faq-item"
                            }
                        };
                        let on_toggle = move |_| faq.update(|f| f.toggle(index));
                        view! {
                            <div class=item_class>
                                <button class="faq-question" on:click=on_toggle>
                                    {*question}
                                </button>
                                <div class="faq-answer">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
