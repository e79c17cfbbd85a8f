// Rust guideline compliant 2026-10-12

//! Pagination engine for ticket lists.
//!
//! Splits a borrowed, ordered list into fixed-size pages and validates
//! movement between them. Navigation follows these rules:
//!
//! - Previous is legal on every page except the first
//! - Next is legal on every page except the last
//! - Exit is always legal
//!
//! Illegal moves are rejected and leave the state untouched.

use crate::{Error, Result};
use std::fmt;
use std::ops::Range;

/// A requested movement between pages or out of the paging loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Move to the previous page.
    Previous,
    /// Move to the next page.
    Next,
    /// Leave pagination and return to the caller.
    Exit,
}

impl Transition {
    /// Parses a numbered page option as shown in the page prompt.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw user input (surrounding whitespace is ignored)
    ///
    /// # Errors
    ///
    /// Returns `Error::NotAnOption` if the input is not `1`, `2` or `3`.
    pub fn from_choice(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Transition::Previous),
            "2" => Ok(Transition::Next),
            "3" => Ok(Transition::Exit),
            other => Err(Error::NotAnOption(other.to_string())),
        }
    }

    /// Returns the option number shown to the user.
    #[must_use]
    pub fn choice(&self) -> u8 {
        match self {
            Transition::Previous => 1,
            Transition::Next => 2,
            Transition::Exit => 3,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Previous => write!(f, "previous"),
            Transition::Next => write!(f, "next"),
            Transition::Exit => write!(f, "exit"),
        }
    }
}

/// Outcome of an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The current page changed.
    Moved {
        /// Page index before the move.
        from: usize,
        /// Page index after the move.
        to: usize,
    },
    /// Pagination finished.
    Exited,
}

/// Computes the number of pages needed for `total_items`.
///
/// Uses integer ceiling division, so exact multiples of `page_size` do not
/// produce a trailing empty page.
///
/// # Errors
///
/// Returns `Error::InvalidPageSize` if `page_size` is zero.
pub fn page_count(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize(page_size));
    }
    Ok(total_items.div_ceil(page_size))
}

/// Returns the index range of the items shown on `page_index`.
///
/// Out-of-range pages yield an empty range.
#[must_use]
pub fn page_range(page_index: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page_index.saturating_mul(page_size).min(total_items);
    let end = page_index
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(total_items);
    start..end
}

/// Returns the items shown on `page_index`.
///
/// The final page holds the remainder and is never padded.
#[must_use]
pub fn items_for_page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    &items[page_range(page_index, page_size, items.len())]
}

/// Lists the transitions that are legal from `page_index`.
///
/// The result is ordered Previous, Next, Exit and always contains Exit.
#[must_use]
pub fn available_transitions(page_index: usize, total_pages: usize) -> Vec<Transition> {
    let mut transitions = Vec::with_capacity(3);

    if total_pages > 1 {
        if page_index > 0 {
            transitions.push(Transition::Previous);
        }
        if page_index + 1 < total_pages {
            transitions.push(Transition::Next);
        }
    }

    transitions.push(Transition::Exit);
    transitions
}

/// Navigation state for one displayed ticket list.
///
/// A `PageState` only exists for non-empty lists, so
/// `current_page < total_pages` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    total_items: usize,
    total_pages: usize,
    current_page: usize,
}

impl PageState {
    /// Creates the state for the first page of a list.
    ///
    /// # Arguments
    ///
    /// * `total_items` - Number of items in the list
    /// * `page_size` - Items per page
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the list is empty and there is nothing to page through.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPageSize` if `page_size` is zero.
    pub fn new(total_items: usize, page_size: usize) -> Result<Option<Self>> {
        let total_pages = page_count(total_items, page_size)?;
        if total_pages == 0 {
            return Ok(None);
        }

        Ok(Some(Self {
            page_size,
            total_items,
            total_pages,
            current_page: 0,
        }))
    }

    /// Items per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items in the list.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages in the list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Zero-based index of the current page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Index range of the items on the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        page_range(self.current_page, self.page_size, self.total_items)
    }

    /// Legal transitions from the current page.
    #[must_use]
    pub fn available_transitions(&self) -> Vec<Transition> {
        available_transitions(self.current_page, self.total_pages)
    }

    /// Applies a transition to the state.
    ///
    /// # Arguments
    ///
    /// * `transition` - The requested movement
    ///
    /// # Returns
    ///
    /// The accepted step. On `Step::Exited` the state is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `Error::TransitionRejected` for Previous on the first page or
    /// Next on the last page. The state is unchanged in that case.
    pub fn apply(&mut self, transition: Transition) -> Result<Step> {
        let from = self.current_page;
        match transition {
            Transition::Previous => {
                if from == 0 {
                    return Err(Error::TransitionRejected(
                        "Already on the first page".to_string(),
                    ));
                }
                self.current_page -= 1;
            }
            Transition::Next => {
                if from + 1 >= self.total_pages {
                    return Err(Error::TransitionRejected(
                        "Already on the last page".to_string(),
                    ));
                }
                self.current_page += 1;
            }
            Transition::Exit => return Ok(Step::Exited),
        }

        Ok(Step::Moved {
            from,
            to: self.current_page,
        })
    }
}

/// A paged view over a borrowed list.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    state: PageState,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a paginator positioned on the first page.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPageSize` if `page_size` is zero.
    pub fn new(items: &'a [T], page_size: usize) -> Result<Option<Self>> {
        Ok(PageState::new(items.len(), page_size)?.map(|state| Self { items, state }))
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Items on the current page.
    #[must_use]
    pub fn current_items(&self) -> &'a [T] {
        &self.items[self.state.range()]
    }

    /// One-based position of the first item on the current page.
    #[must_use]
    pub fn first_item_number(&self) -> usize {
        self.state.range().start + 1
    }

    /// Legal transitions from the current page.
    #[must_use]
    pub fn available_transitions(&self) -> Vec<Transition> {
        self.state.available_transitions()
    }

    /// Applies a transition; see [`PageState::apply`].
    ///
    /// # Errors
    ///
    /// Returns `Error::TransitionRejected` if the move is not legal.
    pub fn apply(&mut self, transition: Transition) -> Result<Step> {
        self.state.apply(transition)
    }
}
