use super::*;

use std::cell::{Cell, RefCell};

use crate::config::Messages;
use crate::state::screen::{Screen, SelectionSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    LoadingText(String),
    PendingAction(String),
    ShowModal,
    ShowSuccess,
    Submit(String),
    Reject(Rejection),
}

#[derive(Default)]
struct RecordingSurface {
    status_modal: bool,
    events: RefCell<Vec<Event>>,
}

impl RecordingSurface {
    fn with_modal() -> Rc<Self> {
        Rc::new(Self { status_modal: true, ..Self::default() })
    }

    fn without_modal() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn submitted(&self) -> bool {
        self.events.borrow().iter().any(|e| matches!(e, Event::Submit(_)))
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl ActionSurface for RecordingSurface {
    fn has_status_modal(&self) -> bool {
        self.status_modal
    }
    fn set_loading_text(&self, message: &str) {
        self.record(Event::LoadingText(message.to_owned()));
    }
    fn set_pending_action(&self, action: &str) {
        self.record(Event::PendingAction(action.to_owned()));
    }
    fn show_status_modal(&self) {
        self.record(Event::ShowModal);
    }
    fn show_success_panel(&self) {
        self.record(Event::ShowSuccess);
    }
    fn submit_form(&self, form_id: &str) {
        self.record(Event::Submit(form_id.to_owned()));
    }
    fn reject(&self, rejection: &Rejection) {
        self.record(Event::Reject(rejection.clone()));
    }
}

/// Manual clock: tasks run only when the test advances time past their due point.
#[derive(Default)]
struct ManualScheduler {
    now_ms: Cell<u32>,
    pending: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    fn advance_to(&self, at_ms: u32) {
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= at_ms)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(i, _)| i);
                due.map(|i| pending.remove(i))
            };
            let Some((due, task)) = next else { break };
            self.now_ms.set(due);
            task();
        }
        self.now_ms.set(at_ms);
    }

    fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let due = self.now_ms.get() + delay_ms;
        self.pending.borrow_mut().push((due, task));
    }
}

fn choreographer(surface: &Rc<RecordingSurface>, clock: &Rc<ManualScheduler>) -> Choreographer {
    Choreographer::new(surface.clone(), clock.clone(), Timing::default())
}

fn bulk_trigger(checked_rows: usize) -> Trigger {
    Trigger::new(Screen::UserList.form_id())
        .with_message(Some("Deleting users…".to_owned()))
        .with_action(Some("delete".to_owned()))
        .with_validator(Rc::new(move || {
            Screen::UserList.validate(SelectionSnapshot { checked_rows, checked_ranks: 0 }, &Messages::default())
        }))
}

// =============================================================
// Phase machine
// =============================================================

#[test]
fn phases_advance_in_order_and_stop() {
    let mut phase = Phase::default();
    let mut seen = vec![phase];
    while let Some(next) = phase.next() {
        seen.push(next);
        phase = next;
    }
    assert_eq!(seen, [Phase::Idle, Phase::Loading, Phase::Success, Phase::Submitted]);
}

#[test]
fn timeline_uses_configured_delays() {
    assert_eq!(
        timeline(Timing::default()),
        vec![(0, Phase::Loading), (1200, Phase::Success), (2000, Phase::Submitted)]
    );
    assert_eq!(
        timeline(Timing { loading_ms: 10, success_ms: 5 }),
        vec![(0, Phase::Loading), (10, Phase::Success), (15, Phase::Submitted)]
    );
}

// =============================================================
// Activation
// =============================================================

#[test]
fn bulk_action_without_selection_never_animates_or_submits() {
    let surface = RecordingSurface::with_modal();
    let clock = Rc::new(ManualScheduler::default());
    let outcome = choreographer(&surface, &clock).activate(&bulk_trigger(0));

    assert_eq!(outcome, Activation::Rejected);
    assert_eq!(clock.pending(), 0);
    clock.advance_to(10_000);

    let events = surface.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], Event::Reject(r) if r.modal_message.is_some()));
    assert!(!surface.submitted());
}

#[test]
fn bulk_action_with_selection_plays_full_sequence() {
    let surface = RecordingSurface::with_modal();
    let clock = Rc::new(ManualScheduler::default());
    let outcome = choreographer(&surface, &clock).activate(&bulk_trigger(2));

    assert_eq!(outcome, Activation::Choreographed);
    assert_eq!(
        surface.events(),
        vec![
            Event::LoadingText("Deleting users…".to_owned()),
            Event::PendingAction("delete".to_owned()),
            Event::ShowModal,
        ]
    );

    clock.advance_to(1199);
    assert!(!surface.events().contains(&Event::ShowSuccess));

    clock.advance_to(1200);
    assert_eq!(surface.events().last(), Some(&Event::ShowSuccess));
    assert!(!surface.submitted());

    clock.advance_to(1999);
    assert!(!surface.submitted());

    clock.advance_to(2000);
    assert_eq!(surface.events().last(), Some(&Event::Submit("user-bulk-form".to_owned())));
    assert_eq!(clock.pending(), 0);
}

#[test]
fn missing_modal_submits_immediately_without_animation() {
    let surface = RecordingSurface::without_modal();
    let clock = Rc::new(ManualScheduler::default());
    let outcome = choreographer(&surface, &clock).activate(&bulk_trigger(1));

    assert_eq!(outcome, Activation::Submitted);
    assert_eq!(surface.events(), vec![Event::Submit("user-bulk-form".to_owned())]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn trigger_without_data_attributes_skips_label_and_action() {
    let surface = RecordingSurface::with_modal();
    let clock = Rc::new(ManualScheduler::default());
    let trigger = Trigger::new(Screen::Constants.form_id())
        .with_message(Some(String::new()))
        .with_action(None);
    choreographer(&surface, &clock).activate(&trigger);
    clock.advance_to(2000);

    assert_eq!(
        surface.events(),
        vec![Event::ShowModal, Event::ShowSuccess, Event::Submit("constant-update-form".to_owned())]
    );
}

#[test]
fn rank_update_without_rank_is_rejected_with_alert() {
    let surface = RecordingSurface::with_modal();
    let clock = Rc::new(ManualScheduler::default());
    let snapshot = Rc::new(Cell::new(SelectionSnapshot { checked_rows: 1, checked_ranks: 0 }));
    let live = Rc::clone(&snapshot);
    let trigger = Trigger::new(Screen::RankUpdate.form_id())
        .with_validator(Rc::new(move || Screen::RankUpdate.validate(live.get(), &Messages::default())));
    let choreo = choreographer(&surface, &clock);

    assert_eq!(choreo.activate(&trigger), Activation::Rejected);
    assert!(matches!(&surface.events()[0], Event::Reject(r) if r.modal_message.is_none()));

    snapshot.set(SelectionSnapshot { checked_rows: 1, checked_ranks: 1 });
    assert_eq!(choreo.activate(&trigger), Activation::Choreographed);
    clock.advance_to(2000);
    assert!(surface.submitted());
}

#[test]
fn double_click_is_not_guarded() {
    let surface = RecordingSurface::with_modal();
    let clock = Rc::new(ManualScheduler::default());
    let choreo = choreographer(&surface, &clock);
    let trigger = Trigger::new(Screen::CreateUser.form_id());

    choreo.activate(&trigger);
    clock.advance_to(500);
    choreo.activate(&trigger);
    clock.advance_to(5000);

    let submits = surface
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Submit(_)))
        .count();
    assert_eq!(submits, 2);
}
