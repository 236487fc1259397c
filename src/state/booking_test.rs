use super::*;

fn sample() -> BookingRequest {
    BookingRequest {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "555-0100".to_owned(),
        service: "Swedish Massage".to_owned(),
        date: "2025-03-15".to_owned(),
        message: "First visit".to_owned(),
    }
}

#[test]
fn summary_contains_every_field_and_the_timestamp() {
    let summary = sample().summary("2025-03-01 09:30:00");
    assert!(summary.contains("Date: 2025-03-01 09:30:00"));
    assert!(summary.contains("Name: Ada Lovelace"));
    assert!(summary.contains("Email: ada@example.com"));
    assert!(summary.contains("Phone: 555-0100"));
    assert!(summary.contains("Service: Swedish Massage"));
    assert!(summary.contains("Preferred Date: 2025-03-15"));
    assert!(summary.contains("Additional Notes: First visit"));
}

#[test]
fn summary_is_framed_by_divider_lines() {
    let summary = sample().summary("now");
    assert!(summary.starts_with("Booking Details:\n---------------\n"));
    assert!(summary.ends_with("---------------"));
}

#[test]
fn snapshot_serializes_with_field_names() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.contains("\"service\":\"Swedish Massage\""));
    assert!(json.contains("\"date\":\"2025-03-15\""));
}

#[test]
fn default_snapshot_is_empty() {
    let request = BookingRequest::default();
    assert!(request.name.is_empty());
    assert!(request.date.is_empty());
}
