// Rust guideline compliant 2026-10-14

//! Tests for the non-interactive `show` and `list` commands.

use chrono::{TimeZone, Utc};
use ticketview_cli::commands::{self, list, show};
use ticketview_cli::create_formatter;
use ticketview_core::{FetchError, Fetched, Selector, Ticket, TicketSource};

/// Serves a fixed ticket list, or fails every request.
struct StaticSource(Result<Vec<Ticket>, FetchError>);

impl TicketSource for StaticSource {
    fn fetch(&self, selector: &Selector) -> Result<Fetched, FetchError> {
        let tickets = self.0.clone()?;
        match selector {
            Selector::All => Ok(Fetched::Many(tickets)),
            Selector::Id(id) => tickets
                .into_iter()
                .find(|t| t.id.to_string() == *id)
                .map(Fetched::One)
                .ok_or(FetchError::NotFound),
        }
    }
}

fn tickets(count: u64) -> StaticSource {
    StaticSource(Ok((1..=count)
        .map(|id| Ticket {
            id,
            subject: format!("Ticket {}", id),
            description: String::new(),
            status: None,
            requester_id: 42,
            created_at: Utc.with_ymd_and_hms(2021, 11, 26, 17, 22, 43).unwrap(),
            updated_at: None,
        })
        .collect()))
}

#[test]
fn test_show_renders_ticket() {
    let formatter = create_formatter("plain", false);
    let output = show::render(&tickets(10), "4", formatter.as_ref()).unwrap();
    assert_eq!(output, "'Ticket 4' opened by 42 on Fri Nov 26, 2021 at 05:22:43PM");
}

#[test]
fn test_show_unknown_and_blank_ids() {
    let formatter = create_formatter("plain", false);
    let expected = FetchError::NotFound.user_message();

    let err = show::render(&tickets(10), "99", formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = show::render(&tickets(10), "  ", formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_show_reports_fetch_failure() {
    let formatter = create_formatter("plain", false);
    let source = StaticSource(Err(FetchError::Unauthorized));

    let err = show::render(&source, "1", formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), FetchError::Unauthorized.user_message());
}

#[test]
fn test_list_renders_requested_page() {
    let formatter = create_formatter("plain", false);
    let output = list::render(&tickets(60), 3, 25, formatter.as_ref()).unwrap();

    assert!(output.starts_with("Page 3 of 3"));
    assert!(output.contains("51 'Ticket 51'"));
    assert!(output.contains("60 'Ticket 60'"));
    assert!(!output.contains("'Ticket 50'"));
}

#[test]
fn test_list_rejects_missing_pages() {
    let formatter = create_formatter("plain", false);

    let err = list::render(&tickets(30), 0, 25, formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), "Page 0 does not exist (1-2)");

    let err = list::render(&tickets(30), 3, 25, formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), "Page 3 does not exist (1-2)");
}

#[test]
fn test_list_without_tickets() {
    let formatter = create_formatter("plain", false);
    let output = list::render(&tickets(0), 1, 25, formatter.as_ref()).unwrap();
    assert_eq!(output, "No tickets found.");
}

#[test]
fn test_list_rejects_zero_page_size() {
    let formatter = create_formatter("plain", false);
    assert!(list::render(&tickets(5), 1, 0, formatter.as_ref()).is_err());
}

#[test]
fn test_list_reports_fetch_failure() {
    let formatter = create_formatter("plain", false);
    let source = StaticSource(Err(FetchError::Timeout));

    let err = list::render(&source, 1, 25, formatter.as_ref()).unwrap_err();
    assert_eq!(err.to_string(), FetchError::Timeout.user_message());
}

#[test]
fn test_json_errors_keep_json_shape() {
    let formatter = create_formatter("json", false);
    let err = show::render(&tickets(10), "99", formatter.as_ref()).unwrap_err();

    let output = commands::render_error(formatter.as_ref(), &err);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["error"], FetchError::NotFound.user_message());
}

#[test]
fn test_plain_errors_are_prefixed() {
    let formatter = create_formatter("plain", false);
    let err = list::render(&tickets(30), 9, 25, formatter.as_ref()).unwrap_err();

    let output = commands::render_error(formatter.as_ref(), &err);
    assert_eq!(output, "Error: Page 9 does not exist (1-2)");
}
