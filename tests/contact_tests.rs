// Host-side tests for the contact form lifecycle on a virtual clock.

use folio_core::{
    ContactController, ContactField, ContactSubmission, ContactTiming, FolioError, SubmitDone,
    SubmitPhase, Submitter, TaskHandle, Timer, VirtualTimer,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn filled(timer: &VirtualTimer) -> ContactController {
    let c = ContactController::simulated(timer.clone(), ContactTiming::default());
    c.set_field(ContactField::Name, "Ada");
    c.set_field(ContactField::Email, "ada@example.com");
    c.set_field(ContactField::Message, "Let's build something.");
    c
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn submit_runs_full_cycle_on_schedule() {
    let timer = VirtualTimer::new();
    let c = filled(&timer);
    let phases = Rc::new(RefCell::new(Vec::new()));
    let seen = phases.clone();
    c.on_change(move |s| seen.borrow_mut().push(s.phase()));

    c.submit().expect("complete form");
    assert_eq!(c.phase(), SubmitPhase::Submitting);

    timer.advance(ms(1499));
    assert_eq!(c.phase(), SubmitPhase::Submitting);
    timer.advance(ms(1));
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    assert_eq!(c.state().name, "Ada");

    timer.advance(ms(2999));
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    timer.advance(ms(1));
    let s = c.state();
    assert_eq!(s.phase(), SubmitPhase::Idle);
    assert_eq!((s.name.as_str(), s.email.as_str(), s.message.as_str()), ("", "", ""));

    assert_eq!(
        *phases.borrow(),
        vec![SubmitPhase::Submitting, SubmitPhase::Submitted, SubmitPhase::Idle]
    );
    assert!(!c.has_pending_task());
}

#[test]
fn incomplete_form_stays_idle() {
    let timer = VirtualTimer::new();
    let c = ContactController::simulated(timer.clone(), ContactTiming::default());
    c.set_field(ContactField::Name, "Ada");
    assert!(matches!(c.submit(), Err(FolioError::IncompleteForm("email"))));
    assert_eq!(c.phase(), SubmitPhase::Idle);
    assert_eq!(timer.pending(), 0);
}

#[test]
fn double_submit_is_rejected() {
    let timer = VirtualTimer::new();
    let c = filled(&timer);
    c.submit().expect("first submit");
    assert!(matches!(c.submit(), Err(FolioError::FormBusy(_))));
    assert_eq!(timer.pending(), 1);
}

#[test]
fn teardown_cancels_in_flight_submission() {
    let timer = VirtualTimer::new();
    let c = filled(&timer);
    c.submit().expect("complete form");
    c.teardown();
    timer.advance(ms(10_000));
    assert_eq!(c.phase(), SubmitPhase::Submitting);
    assert_eq!(timer.pending(), 0);
}

#[test]
fn dropped_controller_is_never_touched() {
    let timer = VirtualTimer::new();
    let c = filled(&timer);
    c.submit().expect("complete form");
    drop(c);
    assert_eq!(timer.pending(), 0);
    assert_eq!(timer.advance(ms(10_000)), 0);
}

#[test]
fn configured_timing_is_honoured() {
    let timer = VirtualTimer::new();
    let timing = ContactTiming {
        submit_delay: ms(200),
        success_window: ms(100),
    };
    let c = ContactController::simulated(timer.clone(), timing);
    for f in ContactField::ALL {
        c.set_field(f, "x");
    }
    c.submit().expect("complete form");
    timer.advance(ms(200));
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    timer.advance(ms(100));
    assert_eq!(c.phase(), SubmitPhase::Idle);
}

#[test]
fn virtual_timer_is_a_timer() {
    fn schedule_noop(t: &dyn Timer) {
        t.schedule(ms(1), Box::new(|| {}));
    }
    let timer = VirtualTimer::new();
    schedule_noop(&timer);
    assert_eq!(timer.advance(ms(1)), 1);
}

/// Answers before `submit` returns and hands back a handle that stays pending.
struct InstantSubmitter;

impl Submitter for InstantSubmitter {
    fn submit(&self, _submission: ContactSubmission, done: SubmitDone) -> TaskHandle {
        done(Ok(()));
        TaskHandle::new()
    }
}

fn filled_instant(timer: &VirtualTimer) -> ContactController {
    let c = ContactController::new(Box::new(InstantSubmitter), Rc::new(timer.clone()), ms(3000));
    for f in ContactField::ALL {
        c.set_field(f, "x");
    }
    c
}

#[test]
fn synchronous_submitter_keeps_success_window_cancellable() {
    let timer = VirtualTimer::new();
    let c = filled_instant(&timer);
    c.submit().expect("complete form");
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    assert!(c.has_pending_task());

    c.teardown();
    assert_eq!(timer.pending(), 0);
    timer.advance(ms(5000));
    let s = c.state();
    assert_eq!(s.phase(), SubmitPhase::Submitted);
    assert_eq!(s.name, "x");
}

#[test]
fn synchronous_submitter_still_resets_after_window() {
    let timer = VirtualTimer::new();
    let c = filled_instant(&timer);
    c.submit().expect("complete form");
    timer.advance(ms(3000));
    assert_eq!(c.phase(), SubmitPhase::Idle);
    assert_eq!(c.state().name, "");
}

#[test]
fn listener_may_call_back_into_controller() {
    let timer = VirtualTimer::new();
    let c = Rc::new(filled(&timer));
    let calls = Rc::new(RefCell::new(0));
    let (seen, ctrl) = (calls.clone(), Rc::downgrade(&c));
    c.on_change(move |s| {
        *seen.borrow_mut() += 1;
        if s.phase() == SubmitPhase::Submitted {
            if let Some(c) = ctrl.upgrade() {
                c.teardown();
            }
        }
    });

    c.submit().expect("complete form");
    timer.advance(ms(1500));
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    timer.advance(ms(5000));
    assert_eq!(c.phase(), SubmitPhase::Submitted);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn listener_may_replace_itself() {
    let timer = VirtualTimer::new();
    let c = Rc::new(filled(&timer));
    let log = Rc::new(RefCell::new(Vec::new()));
    let (first, ctrl) = (log.clone(), Rc::downgrade(&c));
    c.on_change(move |_| {
        first.borrow_mut().push("first");
        if let Some(c) = ctrl.upgrade() {
            let second = first.clone();
            c.on_change(move |_| second.borrow_mut().push("second"));
        }
    });

    c.submit().expect("complete form");
    timer.advance(ms(1500));
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}
