// Rust guideline compliant 2026-10-12

//! Finite state machine for an interactive viewing session.
//!
//! The session moves between three states:
//!
//! - Menu → Paginating (tickets loaded, at least one)
//! - Menu → Menu (tickets loaded, none to show)
//! - Paginating → Paginating (previous/next page)
//! - Paginating → Menu (exit pagination)
//! - Menu → Exiting (quit)
//!
//! Exiting is terminal and accepts no events.

use crate::pagination::{PageState, Step, Transition};
use crate::{Error, Result};

/// Top-level menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Fetch and page through every ticket.
    ViewAll,
    /// Fetch and show one ticket.
    ViewOne,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Every menu option in display order.
    pub const ALL: [MenuChoice; 3] = [MenuChoice::ViewAll, MenuChoice::ViewOne, MenuChoice::Exit];

    /// Parses a numbered menu option.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotAnOption` if the input is not `1`, `2` or `3`.
    pub fn from_choice(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::ViewAll),
            "2" => Ok(MenuChoice::ViewOne),
            "3" => Ok(MenuChoice::Exit),
            other => Err(Error::NotAnOption(other.to_string())),
        }
    }

    /// Returns the option number shown to the user.
    #[must_use]
    pub fn choice(&self) -> u8 {
        match self {
            MenuChoice::ViewAll => 1,
            MenuChoice::ViewOne => 2,
            MenuChoice::Exit => 3,
        }
    }
}

/// State of a viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a top-level menu choice.
    Menu,
    /// Paging through a loaded ticket list.
    Paginating(PageState),
    /// The session has ended.
    Exiting,
}

/// Events that drive the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A ticket list with the given number of items was loaded.
    TicketsLoaded(usize),
    /// The user asked to move within or out of the page list.
    Navigate(Transition),
    /// The user asked to leave the program.
    Quit,
}

impl SessionState {
    /// Checks whether the state accepts an event without computing the result.
    ///
    /// Navigation events are accepted only if the transition is available
    /// from the current page.
    #[must_use]
    pub fn accepts(&self, event: &SessionEvent) -> bool {
        match (self, event) {
            (SessionState::Menu, SessionEvent::TicketsLoaded(_)) => true,
            (SessionState::Menu, SessionEvent::Quit) => true,
            (SessionState::Paginating(state), SessionEvent::Navigate(transition)) => {
                state.available_transitions().contains(transition)
            }
            _ => false,
        }
    }

    /// Returns whether the session has ended.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self, SessionState::Exiting)
    }

    /// Computes the next state for an event.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to apply
    /// * `page_size` - Items per page, used when a ticket list is loaded
    ///
    /// # Returns
    ///
    /// The next state. The receiver is never modified, so callers keep the
    /// current state when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The page move is not available (`Error::TransitionRejected`)
    /// - The event does not apply to this state (`Error::InvalidEvent`)
    /// - `page_size` is zero (`Error::InvalidPageSize`)
    pub fn handle(&self, event: SessionEvent, page_size: usize) -> Result<SessionState> {
        match (*self, event) {
            (SessionState::Menu, SessionEvent::TicketsLoaded(total_items)) => {
                Ok(match PageState::new(total_items, page_size)? {
                    Some(state) => SessionState::Paginating(state),
                    None => SessionState::Menu,
                })
            }
            (SessionState::Menu, SessionEvent::Quit) => Ok(SessionState::Exiting),
            (SessionState::Paginating(mut state), SessionEvent::Navigate(transition)) => {
                match state.apply(transition)? {
                    Step::Moved { .. } => Ok(SessionState::Paginating(state)),
                    Step::Exited => Ok(SessionState::Menu),
                }
            }
            (state, event) => Err(Error::InvalidEvent(format!(
                "{:?} does not apply in {}",
                event,
                state.name()
            ))),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SessionState::Menu => "menu",
            SessionState::Paginating(_) => "pagination",
            SessionState::Exiting => "exit",
        }
    }
}
