#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use serde::Serialize;

/// Dialog text shown after a successful (simulated) submission.
pub const CONFIRMATION_TEXT: &str = "Booking received! We will contact you shortly.";

/// Snapshot of the booking form fields at submit time.
///
/// Nothing leaves the browser; the snapshot exists for the confirmation
/// flow and the submission log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

impl BookingRequest {
    /// Multi-line details block for the submission log, stamped with the
    /// client-local submit time.
    pub fn summary(&self, submitted_at: &str) -> String {
        format!(
            "Booking Details:\n\
             ---------------\n\
             Date: {submitted_at}\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Service: {}\n\
             Preferred Date: {}\n\
             Additional Notes: {}\n\
             ---------------",
            self.name, self.email, self.phone, self.service, self.date, self.message
        )
    }
}
