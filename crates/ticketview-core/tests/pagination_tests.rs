// Rust guideline compliant 2026-10-12

//! Unit tests for the pagination module.
//!
//! These tests cover the concrete paging scenarios, boundary rejections and
//! the scripted navigation contract.

use ticketview_core::pagination::page_range;
use ticketview_core::{
    available_transitions, items_for_page, page_count, Error, PageState, Paginator, Step,
    Transition,
};

use Transition::{Exit, Next, Previous};

#[test]
fn test_page_count_zero_items() {
    assert_eq!(page_count(0, 25).unwrap(), 0);
}

#[test]
fn test_page_count_exact_multiple() {
    assert_eq!(page_count(50, 25).unwrap(), 2, "50 / 25 must be exactly 2 pages");
    assert_eq!(page_count(25, 25).unwrap(), 1);
}

#[test]
fn test_page_count_rounds_up() {
    assert_eq!(page_count(1, 25).unwrap(), 1);
    assert_eq!(page_count(26, 25).unwrap(), 2);
    assert_eq!(page_count(101, 25).unwrap(), 5);
}

#[test]
fn test_page_count_rejects_zero_page_size() {
    assert_eq!(page_count(10, 0), Err(Error::InvalidPageSize(0)));
}

#[test]
fn test_scenario_a_hundred_items() {
    let items: Vec<u32> = (0..100).collect();
    assert_eq!(page_count(items.len(), 25).unwrap(), 4);

    assert_eq!(available_transitions(0, 4), vec![Next, Exit]);
    assert_eq!(available_transitions(1, 4), vec![Previous, Next, Exit]);
    assert_eq!(available_transitions(2, 4), vec![Previous, Next, Exit]);
    assert_eq!(available_transitions(3, 4), vec![Previous, Exit]);

    assert_eq!(items_for_page(&items, 3, 25), &items[75..100]);
}

#[test]
fn test_scenario_b_single_partial_page() {
    let items: Vec<u32> = (0..10).collect();
    assert_eq!(page_count(items.len(), 25).unwrap(), 1);
    assert_eq!(available_transitions(0, 1), vec![Exit]);
    assert_eq!(items_for_page(&items, 0, 25), items.as_slice());
}

#[test]
fn test_scenario_c_no_items() {
    let items: Vec<u32> = Vec::new();
    assert_eq!(page_count(0, 25).unwrap(), 0);
    assert!(PageState::new(0, 25).unwrap().is_none());
    assert!(
        Paginator::new(&items, 25).unwrap().is_none(),
        "An empty list must not produce a paginator"
    );
}

#[test]
fn test_scenario_d_two_full_pages() {
    let items: Vec<u32> = (0..50).collect();
    let state = PageState::new(items.len(), 25).unwrap().unwrap();
    assert_eq!(state.total_pages(), 2);
    assert_eq!(items_for_page(&items, 1, 25).len(), 25);
}

#[test]
fn test_exactly_one_full_page_offers_exit_only() {
    let state = PageState::new(25, 25).unwrap().unwrap();
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.available_transitions(), vec![Exit]);
}

#[test]
fn test_final_page_holds_remainder() {
    let items: Vec<u32> = (0..53).collect();
    assert_eq!(items_for_page(&items, 2, 25), &[50, 51, 52]);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let items: Vec<u32> = (0..10).collect();
    assert!(items_for_page(&items, 5, 25).is_empty());
    assert_eq!(page_range(usize::MAX, 25, 10), 10..10);
}

#[test]
fn test_previous_on_first_page_is_rejected() {
    let mut state = PageState::new(100, 25).unwrap().unwrap();
    let before = state;

    let result = state.apply(Previous);
    assert!(matches!(result, Err(Error::TransitionRejected(_))));
    assert_eq!(state, before, "Rejected transition must not change state");
}

#[test]
fn test_next_on_last_page_is_rejected() {
    let mut state = PageState::new(30, 25).unwrap().unwrap();
    assert_eq!(state.apply(Next), Ok(Step::Moved { from: 0, to: 1 }));

    let before = state;
    let result = state.apply(Next);
    assert!(matches!(result, Err(Error::TransitionRejected(_))));
    assert_eq!(state, before);
}

#[test]
fn test_next_and_previous_on_single_page_are_rejected() {
    let mut state = PageState::new(10, 25).unwrap().unwrap();
    assert!(state.apply(Next).is_err());
    assert!(state.apply(Previous).is_err());
    assert_eq!(state.current_page(), 0);
}

#[test]
fn test_exit_is_always_legal() {
    let mut state = PageState::new(100, 25).unwrap().unwrap();
    for _ in 0..3 {
        assert_eq!(state.apply(Exit), Ok(Step::Exited));
        let _ = state.apply(Next);
    }
    assert_eq!(state.apply(Exit), Ok(Step::Exited));
}

#[test]
fn test_from_choice_parses_numbered_options() {
    assert_eq!(Transition::from_choice("1"), Ok(Previous));
    assert_eq!(Transition::from_choice(" 2\n"), Ok(Next));
    assert_eq!(Transition::from_choice("3"), Ok(Exit));
}

#[test]
fn test_from_choice_rejects_other_input() {
    for input in ["", "0", "4", "next", "12"] {
        let result = Transition::from_choice(input);
        assert!(
            matches!(result, Err(Error::NotAnOption(_))),
            "{:?} should not be an option",
            input
        );
    }
}

#[test]
fn test_choice_numbers_match_parser() {
    for transition in [Previous, Next, Exit] {
        let parsed = Transition::from_choice(&transition.choice().to_string()).unwrap();
        assert_eq!(parsed, transition);
    }
}

#[test]
fn test_transition_display_names() {
    assert_eq!(Previous.to_string(), "previous");
    assert_eq!(Next.to_string(), "next");
    assert_eq!(Exit.to_string(), "exit");
}

#[test]
fn test_paginator_first_item_number() {
    let items: Vec<u32> = (0..60).collect();
    let mut paginator = Paginator::new(&items, 25).unwrap().unwrap();
    assert_eq!(paginator.first_item_number(), 1);

    paginator.apply(Next).unwrap();
    assert_eq!(paginator.first_item_number(), 26);
    assert_eq!(paginator.current_items().first(), Some(&25));
}

/// Records `(page_index, items_shown, transitions)` for each displayed page.
fn drive(total_items: usize, page_size: usize, script: &[Transition]) -> Vec<(usize, usize, Vec<Transition>)> {
    let items: Vec<usize> = (0..total_items).collect();
    let mut trace = Vec::new();

    let Some(mut paginator) = Paginator::new(&items, page_size).unwrap() else {
        return trace;
    };

    trace.push((
        paginator.state().current_page(),
        paginator.current_items().len(),
        paginator.available_transitions(),
    ));

    for transition in script {
        match paginator.apply(*transition) {
            Ok(Step::Exited) => break,
            Ok(Step::Moved { .. }) | Err(_) => trace.push((
                paginator.state().current_page(),
                paginator.current_items().len(),
                paginator.available_transitions(),
            )),
        }
    }

    trace
}

#[test]
fn test_scripted_navigation_trace() {
    let trace = drive(60, 25, &[Previous, Next, Next, Next, Previous, Exit, Next]);

    assert_eq!(
        trace,
        vec![
            (0, 25, vec![Next, Exit]),
            (0, 25, vec![Next, Exit]),
            (1, 25, vec![Previous, Next, Exit]),
            (2, 10, vec![Previous, Exit]),
            (2, 10, vec![Previous, Exit]),
            (1, 25, vec![Previous, Next, Exit]),
        ]
    );
}

#[test]
fn test_scripted_navigation_empty_list_shows_nothing() {
    assert!(drive(0, 25, &[Next, Exit]).is_empty());
}
