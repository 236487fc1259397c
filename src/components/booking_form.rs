//! Booking section: the request form and its calendar date picker.
//!
//! Submission is simulated: the snapshot is logged, a confirmation dialog
//! is shown, and the fields reset. No data leaves the browser.

use chrono::Local;
use leptos::prelude::*;

use crate::components::booking_calendar::BookingCalendar;
use crate::state::booking::BookingRequest;
#[cfg(feature = "hydrate")]
use crate::state::booking::CONFIRMATION_TEXT;

/// Services offered in the booking select.
const SERVICES: [&str; 5] = [
    "Swedish Massage",
    "Deep Tissue Massage",
    "Rejuvenating Facial",
    "Hot Stone Therapy",
    "Aromatherapy Session",
];

/// Booking form with bound field signals and the month-grid date picker.
#[component]
pub fn BookingSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = BookingRequest {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            service: service.get(),
            date: date.get(),
            message: message.get(),
        };
        let submitted_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        #[cfg(feature = "hydrate")]
        {
            log::info!("{}", request.summary(&submitted_at));
            if let Ok(json) = serde_json::to_string(&request) {
                log::debug!("booking snapshot: {json}");
            }
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(CONFIRMATION_TEXT);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, submitted_at);

        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        service.set(String::new());
        date.set(String::new());
        message.set(String::new());
    };

    view! {
        <section id="booking" class="booking">
            <h2>"Book an Appointment"</h2>
            <div class="booking__layout">
                <BookingCalendar date=date/>

                <form id="bookingForm" class="booking-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label for="phone">"Phone"</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />

                    <label for="service">"Service"</label>
                    <select
                        id="service"
                        name="service"
                        prop:value=move || service.get()
                        on:change=move |ev| service.set(event_target_value(&ev))
                    >
                        <option value="">"Select a service..."</option>
                        {SERVICES
                            .iter()
                            .map(|label| view! { <option value=*label>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>

                    <label for="date">"Preferred Date"</label>
                    <input
                        id="date"
                        name="date"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />

                    <label for="message">"Additional Notes"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>

                    <button type="submit" class="btn btn--primary">
                        "Book Now"
                    </button>
                </form>
            </div>
        </section>
    }
}
