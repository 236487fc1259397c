//! Widget components, one module per page behavior. Each maps a state
//! module onto markup; browser side effects are hydrate-gated.

pub mod back_to_top;
pub mod booking_calendar;
pub mod booking_form;
pub mod chat_widget;
pub mod faq_accordion;
pub mod navbar;
pub mod stats_section;
pub mod testimonial_carousel;
