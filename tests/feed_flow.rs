// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the swipe-to-fetch-to-paginate flow, driven
//! through the reader's public state machine API.

use iced::Point;
use newsreel::error::{Error, FETCH_FAILED_MESSAGE};
use newsreel::feed::{Article, FetchState};
use newsreel::ui::reader::{Effect, Message, State};
use newsreel::ui::swipe_gate;

fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        domain: "example.com".to_string(),
        description: Some(format!("About {title}")),
        social_image: None,
    }
}

/// Drives the gate through a full press-drag-release with displacement `dx`.
fn swipe(state: &mut State, dx: f32) -> Effect {
    state.handle(Message::Gate(swipe_gate::Message::PointerMoved(Point::new(
        60.0, 30.0,
    ))));
    state.handle(Message::Gate(swipe_gate::Message::KnobGrabbed));
    state.handle(Message::Gate(swipe_gate::Message::PointerMoved(Point::new(
        60.0 + dx,
        30.0,
    ))));
    state.handle(Message::Gate(swipe_gate::Message::Released))
}

fn settle_gate(state: &mut State) {
    for _ in 0..200 {
        if !state.gate().is_animating() {
            break;
        }
        state.handle(Message::Gate(swipe_gate::Message::AnimationTick));
    }
}

#[test]
fn scenario_a_long_swipe_commits_and_issues_the_fetch() {
    let mut state = State::default();

    let effect = swipe(&mut state, 200.0);

    assert!(matches!(effect, Effect::StartFetch));
    assert!(state.is_fetch_pending());
    assert_eq!(state.gate().phase(), swipe_gate::Phase::Committed);
    assert!(state.gate().swiped());
}

#[test]
fn scenario_b_short_swipe_cancels_and_returns_to_origin() {
    let mut state = State::default();

    let effect = swipe(&mut state, 100.0);

    assert!(matches!(effect, Effect::None));
    assert!(matches!(state.fetch(), FetchState::NotRequested));
    assert_eq!(state.gate().phase(), swipe_gate::Phase::Cancelled);

    settle_gate(&mut state);
    assert_eq!(state.gate().offset(), 0.0);
}

#[test]
fn scenario_c_resolved_feed_shows_first_article_with_bounded_controls() {
    let mut state = State::default();
    swipe(&mut state, 200.0);

    state.handle(Message::FetchCompleted(Ok(vec![
        article("A"),
        article("B"),
    ])));

    let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
        panic!("feed should be resolved");
    };
    assert_eq!(navigator.current().map(|a| a.title.as_str()), Some("A"));
    assert!(navigator.can_next());
    assert!(!navigator.can_previous());
}

#[test]
fn scenario_d_next_reaches_the_last_article_and_clamps_there() {
    let mut state = State::default();
    swipe(&mut state, 200.0);
    state.handle(Message::FetchCompleted(Ok(vec![
        article("A"),
        article("B"),
    ])));

    state.handle(Message::NextArticle);

    let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
        panic!("feed should be resolved");
    };
    assert_eq!(navigator.current().map(|a| a.title.as_str()), Some("B"));
    assert!(!navigator.can_next());
    assert!(navigator.can_previous());

    // Clicking Next again changes nothing.
    state.handle(Message::NextArticle);
    let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
        panic!("feed should be resolved");
    };
    assert_eq!(navigator.current().map(|a| a.title.as_str()), Some("B"));
}

#[test]
fn scenario_e_fetch_error_shows_the_fixed_message_without_navigation() {
    let mut state = State::default();
    swipe(&mut state, 200.0);

    state.handle(Message::FetchCompleted(Err(Error::Http(
        "connect timeout".into(),
    ))));

    let FetchState::Resolved(Err(err)) = state.fetch() else {
        panic!("feed should be failed");
    };
    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);

    // There is nothing to navigate; the operations are inert.
    assert!(matches!(state.handle(Message::NextArticle), Effect::None));
    assert!(matches!(
        state.handle(Message::PreviousArticle),
        Effect::None
    ));
}

#[test]
fn scenario_f_empty_feed_is_the_distinct_no_articles_state() {
    let mut state = State::default();
    swipe(&mut state, 200.0);

    state.handle(Message::FetchCompleted(Ok(Vec::new())));

    let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
        panic!("empty feed is still a successful resolution");
    };
    assert!(navigator.is_empty());
    assert!(navigator.current().is_none());
}

#[test]
fn fetch_gate_is_monotonic_across_repeated_swipes() {
    let mut state = State::default();

    assert!(matches!(swipe(&mut state, 200.0), Effect::StartFetch));

    // Further commits while pending or after resolution never re-trigger.
    settle_gate(&mut state);
    assert!(matches!(swipe(&mut state, 250.0), Effect::None));

    state.handle(Message::FetchCompleted(Ok(vec![article("A")])));
    settle_gate(&mut state);
    assert!(matches!(swipe(&mut state, 250.0), Effect::None));
    assert!(matches!(state.fetch(), FetchState::Resolved(Ok(_))));
}

#[test]
fn pagination_walks_every_index_and_back() {
    let n: usize = 5;
    let mut state = State::default();
    swipe(&mut state, 200.0);
    state.handle(Message::FetchCompleted(Ok((0..n)
        .map(|i| article(&format!("T{i}")))
        .collect())));

    for expected in 1..n {
        state.handle(Message::NextArticle);
        let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
            panic!("feed should be resolved");
        };
        assert_eq!(navigator.current_index(), expected);
    }

    for expected in (0..n - 1).rev() {
        state.handle(Message::PreviousArticle);
        let FetchState::Resolved(Ok(navigator)) = state.fetch() else {
            panic!("feed should be resolved");
        };
        assert_eq!(navigator.current_index(), expected);
    }

    assert!(matches!(
        state.handle(Message::PreviousArticle),
        Effect::None
    ));
}
