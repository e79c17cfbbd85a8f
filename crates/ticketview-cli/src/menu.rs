// Rust guideline compliant 2026-10-13

//! Interactive menu driver.
//!
//! Reads numbered choices from any `BufRead`, writes to any `Write`, and
//! moves through [`SessionState`] one event at a time. End of input acts as
//! "return to the menu" while paging and as "exit" at the menu.

use anyhow::Result;
use std::io::{BufRead, Write};
use ticketview_core::{
    format_summary, items_for_page, FetchError, Fetched, MenuChoice, PageState, Selector,
    SessionEvent, SessionState, Ticket, TicketSource, Transition,
};
use tracing::{debug, info, warn};

const RULE: &str = "-------------------------------------";
const OPTIONS_HEADER: &str = "Please select one of the following options:";
const OPTIONS_RULE: &str = "-------------------------------------------";
const NOT_AN_OPTION: &str = "That was not an option...";

/// Label shown for a top-level menu option.
#[must_use]
pub fn menu_label(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::ViewAll => "View all tickets",
        MenuChoice::ViewOne => "View a ticket",
        MenuChoice::Exit => "Exit",
    }
}

/// Label shown for a page navigation option.
#[must_use]
pub fn transition_label(transition: Transition) -> &'static str {
    match transition {
        Transition::Previous => "View the previous page",
        Transition::Next => "View the next page",
        Transition::Exit => "Return to the menu",
    }
}

/// Drives one interactive session.
pub struct MenuDriver<'a, R, W> {
    source: &'a dyn TicketSource,
    input: R,
    output: W,
    page_size: usize,
    tickets: Vec<Ticket>,
}

impl<'a, R: BufRead, W: Write> MenuDriver<'a, R, W> {
    /// Creates a driver over the given source and streams.
    pub fn new(source: &'a dyn TicketSource, input: R, output: W, page_size: usize) -> Self {
        Self {
            source,
            input,
            output,
            page_size,
            tickets: Vec::new(),
        }
    }

    /// Runs the session until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// page size is invalid.
    pub fn run(mut self) -> Result<()> {
        self.banner("Welcome to the Ticket Viewer!")?;
        writeln!(self.output)?;

        let mut state = SessionState::Menu;
        while !state.is_exiting() {
            state = match state {
                SessionState::Menu => self.menu_step()?,
                SessionState::Paginating(page) => self.page_step(page)?,
                SessionState::Exiting => break,
            };
        }

        self.banner("Thank you for using the Ticket Viewer!")?;
        self.output.flush()?;
        Ok(())
    }

    fn banner(&mut self, text: &str) -> Result<()> {
        let rule = "-".repeat(text.len().max(RULE.len()));
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "{}", text)?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn menu_step(&mut self) -> Result<SessionState> {
        writeln!(self.output, "{}", OPTIONS_HEADER)?;
        writeln!(self.output, "{}", OPTIONS_RULE)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "[{}] {}", choice.choice(), menu_label(choice))?;
        }

        let Some(line) = self.read_line()? else {
            debug!("input closed at menu");
            return Ok(SessionState::Menu.handle(SessionEvent::Quit, self.page_size)?);
        };
        writeln!(self.output)?;

        let next = match MenuChoice::from_choice(&line) {
            Ok(MenuChoice::ViewAll) => self.load(&Selector::All)?,
            Ok(MenuChoice::ViewOne) => self.view_one()?,
            Ok(MenuChoice::Exit) => {
                return Ok(SessionState::Menu.handle(SessionEvent::Quit, self.page_size)?);
            }
            Err(_) => {
                writeln!(self.output, "{}", NOT_AN_OPTION)?;
                SessionState::Menu
            }
        };

        if next == SessionState::Menu {
            writeln!(self.output)?;
        }
        Ok(next)
    }

    fn view_one(&mut self) -> Result<SessionState> {
        writeln!(self.output, "Enter a ticket ID: ")?;
        let line = self.read_line()?.unwrap_or_default();

        match Selector::id(&line) {
            Some(selector) => self.load(&selector),
            None => {
                self.report(&FetchError::NotFound)?;
                Ok(SessionState::Menu)
            }
        }
    }

    fn load(&mut self, selector: &Selector) -> Result<SessionState> {
        match self.source.fetch(selector) {
            Ok(Fetched::One(ticket)) => {
                writeln!(self.output, "{}", format_summary(&ticket))?;
                Ok(SessionState::Menu)
            }
            Ok(Fetched::Many(tickets)) => {
                info!(count = tickets.len(), "loaded tickets");
                self.tickets = tickets;
                let next = SessionState::Menu
                    .handle(SessionEvent::TicketsLoaded(self.tickets.len()), self.page_size)?;
                if next == SessionState::Menu {
                    writeln!(self.output, "No tickets found.")?;
                }
                Ok(next)
            }
            Err(err) => {
                self.report(&err)?;
                Ok(SessionState::Menu)
            }
        }
    }

    fn report(&mut self, err: &FetchError) -> Result<()> {
        warn!(error = %err, "fetch failed");
        writeln!(self.output, "{}", err.user_message())?;
        Ok(())
    }

    fn page_step(&mut self, page: PageState) -> Result<SessionState> {
        writeln!(
            self.output,
            "Page {} of {}",
            page.current_page() + 1,
            page.total_pages()
        )?;
        writeln!(self.output, "{}", RULE)?;

        let first = page.range().start;
        let items = items_for_page(&self.tickets, page.current_page(), page.page_size());
        for (offset, ticket) in items.iter().enumerate() {
            writeln!(self.output, "{} {}", first + offset + 1, format_summary(ticket))?;
        }
        writeln!(self.output)?;

        let state = SessionState::Paginating(page);
        loop {
            writeln!(self.output, "{}", OPTIONS_HEADER)?;
            writeln!(self.output, "{}", OPTIONS_RULE)?;
            for transition in page.available_transitions() {
                writeln!(
                    self.output,
                    "[{}] {}",
                    transition.choice(),
                    transition_label(transition)
                )?;
            }

            let transition = match self.read_line()? {
                Some(line) => {
                    writeln!(self.output)?;
                    Transition::from_choice(&line)
                }
                None => {
                    debug!("input closed while paging");
                    Ok(Transition::Exit)
                }
            };

            let result = transition.and_then(|transition| {
                debug!(%transition, page = page.current_page(), "page option");
                state.handle(SessionEvent::Navigate(transition), self.page_size)
            });

            match result {
                Ok(next) => {
                    if next == SessionState::Menu {
                        self.tickets.clear();
                    }
                    return Ok(next);
                }
                Err(err) if err.is_recoverable() => {
                    debug!(reason = %err, "page option rejected");
                    writeln!(self.output, "{}", NOT_AN_OPTION)?;
                    writeln!(self.output)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    struct ThreeTickets;

    impl TicketSource for ThreeTickets {
        fn fetch(&self, _selector: &Selector) -> std::result::Result<Fetched, FetchError> {
            Ok(Fetched::Many(
                (1..=3)
                    .map(|id| Ticket {
                        id,
                        subject: format!("Ticket {}", id),
                        description: String::new(),
                        status: None,
                        requester_id: 7,
                        created_at: Utc.with_ymd_and_hms(2021, 11, 26, 17, 22, 43).unwrap(),
                        updated_at: None,
                    })
                    .collect(),
            ))
        }
    }

    fn paging_driver(script: &str) -> (MenuDriver<'static, Cursor<String>, Vec<u8>>, PageState) {
        let mut driver = MenuDriver::new(&ThreeTickets, Cursor::new(script.to_string()), Vec::new(), 2);
        match driver.load(&Selector::All).unwrap() {
            SessionState::Paginating(page) => (driver, page),
            other => panic!("Expected pagination, got {:?}", other),
        }
    }

    #[test]
    fn test_returning_to_menu_drops_tickets() {
        let (mut driver, page) = paging_driver("3\n");
        assert_eq!(driver.tickets.len(), 3);

        assert_eq!(driver.page_step(page).unwrap(), SessionState::Menu);
        assert!(driver.tickets.is_empty());
    }

    #[test]
    fn test_end_of_input_while_paging_drops_tickets() {
        let (mut driver, page) = paging_driver("");

        assert_eq!(driver.page_step(page).unwrap(), SessionState::Menu);
        assert!(driver.tickets.is_empty());
    }

    #[test]
    fn test_moving_pages_keeps_tickets() {
        let (mut driver, page) = paging_driver("2\n");

        match driver.page_step(page).unwrap() {
            SessionState::Paginating(next) => assert_eq!(next.current_page(), 1),
            other => panic!("Expected next page, got {:?}", other),
        }
        assert_eq!(driver.tickets.len(), 3);
    }
}
