use chrono::{NaiveDate, NaiveDateTime};
use slot_poll_bot::error::SchedulingError;
use slot_poll_bot::services::coordinator::EventCoordinator;
use slot_poll_bot::store::InMemoryEventStore;
use slot_poll_bot::utils::datetime::{FixedClock, TimePoint};
use std::sync::Arc;
use std::thread;

const CHAT: i64 = 1;
const ALICE: u64 = 10;
const BOB: u64 = 20;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 10)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn coordinator() -> EventCoordinator {
    EventCoordinator::new(InMemoryEventStore::new(), FixedClock(now()))
}

fn point(month: u32, day: u32, hour: u32) -> TimePoint {
    TimePoint::from_fields(2026, month, day, hour, 0).unwrap()
}

#[test]
fn test_sync_scenario() {
    let coordinator = coordinator();

    let proposal = coordinator
        .propose(CHAT, "Sync", "31 января 20:00, 1 февраля 18:00, bogus")
        .unwrap();
    assert_eq!(proposal.event.name, "Sync");
    assert_eq!(proposal.event.sorted_options(), vec![point(1, 31, 20), point(2, 1, 18)]);
    assert_eq!(proposal.rejected, vec!["bogus".to_string()]);

    let excluded = coordinator.exclude_option(CHAT, ALICE, "31 января 20:00").unwrap();
    assert_eq!(excluded, point(1, 31, 20));

    assert_eq!(coordinator.finalize(CHAT), Ok(vec![point(2, 1, 18)]));
    assert_eq!(coordinator.finalize(CHAT), Err(SchedulingError::NoActiveEvent));
}

#[test]
fn test_propose_from_args_splits_name() {
    let coordinator = coordinator();
    let proposal = coordinator
        .propose_from_args(CHAT, "Board games | 1 февраля 18:00")
        .unwrap();
    assert_eq!(proposal.event.name, "Board games");
    assert_eq!(coordinator.active_events(), 1);
}

#[test]
fn test_propose_from_args_without_delimiter_is_malformed() {
    let coordinator = coordinator();
    assert_eq!(
        coordinator.propose_from_args(CHAT, "Board games 1 февраля 18:00"),
        Err(SchedulingError::MalformedProposal)
    );
    assert_eq!(coordinator.active_events(), 0);
}

#[test]
fn test_malformed_args_keep_live_event_and_exclusions() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00, 2 февраля 18:00").unwrap();
    coordinator.exclude_option(CHAT, ALICE, "1 февраля 18:00").unwrap();
    let before = coordinator.event(CHAT).unwrap();

    for args in ["Board games 3 февраля 18:00", " | 3 февраля 18:00", "   |   "] {
        assert_eq!(
            coordinator.propose_from_args(CHAT, args),
            Err(SchedulingError::MalformedProposal),
            "args {args:?}"
        );
    }

    let after = coordinator.event(CHAT).unwrap();
    assert_eq!(after, before);
    assert_eq!(after.exclusions_for(ALICE), [point(2, 1, 18)].into());
}

#[test]
fn test_long_name_is_accepted() {
    let coordinator = coordinator();
    let name = "x".repeat(101);
    let proposal = coordinator
        .propose_from_args(CHAT, &format!("{name} | 1 февраля 18:00"))
        .unwrap();
    assert_eq!(proposal.event.name, name);
}

#[test]
fn test_all_unparsable_proposal_fails() {
    let coordinator = coordinator();
    assert_eq!(
        coordinator.propose(CHAT, "Sync", "bogus, 31 февраля 10:00, 1 january 10:00"),
        Err(SchedulingError::NoValidDates)
    );
    assert!(coordinator.event(CHAT).is_none());
}

#[test]
fn test_rejected_inputs_keep_order() {
    let coordinator = coordinator();
    let proposal = coordinator
        .propose(CHAT, "Sync", "zzz, 1 февраля 18:00, aaa, 25 марта 25:00")
        .unwrap();
    assert_eq!(
        proposal.rejected,
        vec!["zzz".to_string(), "aaa".to_string(), "25 марта 25:00".to_string()]
    );
}

#[test]
fn test_operations_without_event_fail() {
    let coordinator = coordinator();
    assert_eq!(
        coordinator.exclude_option(CHAT, ALICE, "1 февраля 18:00"),
        Err(SchedulingError::NoActiveEvent)
    );
    assert_eq!(
        coordinator.add_option(CHAT, "1 февраля 18:00"),
        Err(SchedulingError::NoActiveEvent)
    );
    assert_eq!(coordinator.finalize(CHAT), Err(SchedulingError::NoActiveEvent));
}

#[test]
fn test_no_active_event_reported_before_bad_date() {
    let coordinator = coordinator();
    assert_eq!(
        coordinator.exclude_option(CHAT, ALICE, "garbage"),
        Err(SchedulingError::NoActiveEvent)
    );
}

#[test]
fn test_exclude_is_idempotent() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00, 2 февраля 18:00").unwrap();

    coordinator.exclude_option(CHAT, ALICE, "1 февраля 18:00").unwrap();
    let after_first = coordinator.event(CHAT).unwrap();
    coordinator.exclude_option(CHAT, ALICE, "1 февраля 18:00").unwrap();
    let after_second = coordinator.event(CHAT).unwrap();

    assert_eq!(after_first.exclusions_for(ALICE).len(), 1);
    assert_eq!(after_first, after_second);
}

#[test]
fn test_exclude_unknown_option_suggests_add() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00").unwrap();

    assert_eq!(
        coordinator.exclude_option(CHAT, ALICE, "3 февраля 19:00"),
        Err(SchedulingError::OptionNotOffered { raw: "3 февраля 19:00".to_string() })
    );
    assert!(coordinator.event(CHAT).unwrap().exclusions.is_empty());
}

#[test]
fn test_added_option_can_then_be_excluded() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00").unwrap();

    coordinator.add_option(CHAT, "3 февраля 19:00").unwrap();
    coordinator.exclude_option(CHAT, BOB, "3 февраля 19:00").unwrap();

    assert_eq!(coordinator.finalize(CHAT), Ok(vec![point(2, 1, 18)]));
}

#[test]
fn test_add_unparsable_option_fails() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00").unwrap();
    assert_eq!(
        coordinator.add_option(CHAT, "someday"),
        Err(SchedulingError::UnparsableDate { raw: "someday".to_string() })
    );
    assert_eq!(coordinator.event(CHAT).unwrap().options.len(), 1);
}

#[test]
fn test_everything_excluded_resolves_to_empty_list() {
    let coordinator = coordinator();
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00, 2 февраля 18:00").unwrap();
    coordinator.exclude_option(CHAT, ALICE, "1 февраля 18:00").unwrap();
    coordinator.exclude_option(CHAT, BOB, "2 февраля 18:00").unwrap();

    assert_eq!(coordinator.finalize(CHAT), Ok(Vec::new()));
    assert!(coordinator.event(CHAT).is_none());
}

#[test]
fn test_finalize_sorts_chronologically() {
    let coordinator = coordinator();
    coordinator
        .propose(CHAT, "Sync", "3 февраля 9:00, 1 февраля 18:00, 1 февраля 9:00")
        .unwrap();
    assert_eq!(
        coordinator.finalize(CHAT),
        Ok(vec![point(2, 1, 9), point(2, 1, 18), point(2, 3, 9)])
    );
}

#[test]
fn test_chats_do_not_share_events() {
    let coordinator = coordinator();
    coordinator.propose(1, "One", "1 февраля 18:00").unwrap();
    coordinator.propose(2, "Two", "2 февраля 18:00").unwrap();

    coordinator.exclude_option(1, ALICE, "1 февраля 18:00").unwrap();
    assert_eq!(
        coordinator.exclude_option(2, ALICE, "1 февраля 18:00"),
        Err(SchedulingError::OptionNotOffered { raw: "1 февраля 18:00".to_string() })
    );

    assert_eq!(coordinator.finalize(1), Ok(Vec::new()));
    assert_eq!(coordinator.finalize(2), Ok(vec![point(2, 2, 18)]));
}

#[test]
fn test_concurrent_exclusions_are_all_recorded() {
    let coordinator = Arc::new(coordinator());
    coordinator.propose(CHAT, "Sync", "1 февраля 18:00").unwrap();

    let handles: Vec<_> = (0..16u64)
        .map(|participant| {
            let coordinator = coordinator.clone();
            thread::spawn(move || {
                coordinator.exclude_option(CHAT, participant, "1 февраля 18:00").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(coordinator.event(CHAT).unwrap().exclusions.len(), 16);
}
