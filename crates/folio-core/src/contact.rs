//! Contact form submit lifecycle.
//!
//! `Idle --submit--> Submitting --(delay)--> Submitted --(window)--> Idle`, with
//! the fields cleared on the way back to `Idle`. The submission itself goes
//! through a [`Submitter`], so the simulated delay can be swapped for a real
//! request without touching the state machine.

use crate::constants::{CONTACT_SUBMIT_DELAY_MS, CONTACT_SUCCESS_WINDOW_MS};
use crate::error::{FolioError, Result};
use crate::task::{TaskHandle, Timer};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Submitting => "submitting",
            SubmitPhase::Submitted => "submitted",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: SubmitPhase,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// The form is replaced by the success message while `Submitted`, so
    /// input is ignored then.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        true
    }

    pub fn validate(&self) -> Result<()> {
        match ContactField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            Some(missing) => Err(FolioError::IncompleteForm(missing.name())),
            None => Ok(()),
        }
    }

    pub fn begin_submit(&mut self) -> Result<()> {
        if self.phase != SubmitPhase::Idle {
            return Err(FolioError::FormBusy(self.phase.label()));
        }
        self.validate()?;
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    pub fn complete_submit(&mut self) -> bool {
        self.transition(SubmitPhase::Submitting, SubmitPhase::Submitted)
    }

    /// A failed submission returns to `Idle` with the fields kept.
    pub fn abort_submit(&mut self) -> bool {
        self.transition(SubmitPhase::Submitting, SubmitPhase::Idle)
    }

    pub fn finish_display(&mut self) -> bool {
        if !self.transition(SubmitPhase::Submitted, SubmitPhase::Idle) {
            return false;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        true
    }

    fn transition(&mut self, from: SubmitPhase, to: SubmitPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

/// What gets sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFormState> for ContactSubmission {
    fn from(s: &ContactFormState) -> Self {
        Self {
            name: s.name.trim().to_string(),
            email: s.email.trim().to_string(),
            message: s.message.clone(),
        }
    }
}

pub type SubmitDone = Box<dyn FnOnce(Result<()>)>;

pub trait Submitter {
    /// Start sending; `done` is called at most once unless the returned task
    /// is cancelled first.
    fn submit(&self, submission: ContactSubmission, done: SubmitDone) -> TaskHandle;
}

/// Accepts every submission after a fixed delay. Nothing leaves the page.
pub struct SimulatedSubmitter<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSubmitter<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl<T: Timer> Submitter for SimulatedSubmitter<T> {
    fn submit(&self, submission: ContactSubmission, done: SubmitDone) -> TaskHandle {
        log::debug!("[contact] simulated send for <{}>", submission.email);
        self.timer.schedule(self.delay, Box::new(move || done(Ok(()))))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactTiming {
    pub submit_delay: Duration,
    pub success_window: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(CONTACT_SUBMIT_DELAY_MS),
            success_window: Duration::from_millis(CONTACT_SUCCESS_WINDOW_MS),
        }
    }
}

type ChangeListener = Box<dyn FnMut(&ContactFormState)>;

struct ContactInner {
    state: RefCell<ContactFormState>,
    pending: RefCell<Option<TaskHandle>>,
    listener: RefCell<Option<ChangeListener>>,
    torn_down: Cell<bool>,
    submitter: Box<dyn Submitter>,
    timer: Rc<dyn Timer>,
    success_window: Duration,
}

impl ContactInner {
    /// The listener runs with no borrow held, so it may call back into the
    /// controller. It is put back only if it was not replaced meanwhile.
    fn notify(&self) {
        let snapshot = self.state.borrow().clone();
        let Some(mut listener) = self.listener.borrow_mut().take() else {
            return;
        };
        listener(&snapshot);
        if self.torn_down.get() {
            return;
        }
        let mut slot = self.listener.borrow_mut();
        if slot.is_none() {
            *slot = Some(listener);
        }
    }

    fn cancel_pending(&self) {
        if let Some(task) = self.pending.borrow_mut().take() {
            task.cancel();
        }
    }

    fn on_submitted(self: &Rc<Self>, result: Result<()>) {
        if self.torn_down.get() {
            return;
        }
        self.pending.borrow_mut().take();
        match result {
            Ok(()) => {
                if !self.state.borrow_mut().complete_submit() {
                    return;
                }
                log::debug!("[contact] submitted");
                let weak = Rc::downgrade(self);
                let task = self.timer.schedule(
                    self.success_window,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.on_window_elapsed();
                        }
                    }),
                );
                *self.pending.borrow_mut() = Some(task);
            }
            Err(e) => {
                log::warn!("[contact] send failed: {}", e);
                if !self.state.borrow_mut().abort_submit() {
                    return;
                }
            }
        }
        self.notify();
    }

    fn on_window_elapsed(&self) {
        if self.torn_down.get() {
            return;
        }
        self.pending.borrow_mut().take();
        if self.state.borrow_mut().finish_display() {
            log::debug!("[contact] form reset");
            self.notify();
        }
    }
}

impl Drop for ContactInner {
    fn drop(&mut self) {
        if let Some(task) = self.pending.get_mut().take() {
            task.cancel();
        }
    }
}

/// Owns the form state for the lifetime of the contact section.
///
/// Scheduled continuations hold only weak references, so once the controller
/// is torn down or dropped nothing can touch the state again.
pub struct ContactController {
    inner: Rc<ContactInner>,
}

impl ContactController {
    pub fn new(submitter: Box<dyn Submitter>, timer: Rc<dyn Timer>, success_window: Duration) -> Self {
        Self {
            inner: Rc::new(ContactInner {
                state: RefCell::new(ContactFormState::new()),
                pending: RefCell::new(None),
                listener: RefCell::new(None),
                torn_down: Cell::new(false),
                submitter,
                timer,
                success_window,
            }),
        }
    }

    /// Simulated submission on the given timer.
    pub fn simulated<T: Timer + Clone + 'static>(timer: T, timing: ContactTiming) -> Self {
        let submitter = SimulatedSubmitter::new(timer.clone(), timing.submit_delay);
        Self::new(Box::new(submitter), Rc::new(timer), timing.success_window)
    }

    /// Called with a snapshot after every phase change.
    pub fn on_change(&self, listener: impl FnMut(&ContactFormState) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn state(&self) -> ContactFormState {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.inner.state.borrow().phase()
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) -> bool {
        self.inner.state.borrow_mut().set_field(field, value)
    }

    pub fn submit(&self) -> Result<()> {
        let submission = {
            let mut state = self.inner.state.borrow_mut();
            state.begin_submit()?;
            ContactSubmission::from(&*state)
        };
        log::debug!("[contact] submitting");
        self.inner.notify();
        let weak: Weak<ContactInner> = Rc::downgrade(&self.inner);
        let task = self.inner.submitter.submit(
            submission,
            Box::new(move |result| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_submitted(result);
                }
            }),
        );
        // A synchronous submitter may already have finished and parked the
        // success window in `pending`; that task must stay the one we cancel.
        let still_sending = self.phase() == SubmitPhase::Submitting;
        let mut pending = self.inner.pending.borrow_mut();
        if still_sending && pending.is_none() && task.is_pending() {
            *pending = Some(task);
        }
        Ok(())
    }

    pub fn has_pending_task(&self) -> bool {
        self.inner
            .pending
            .borrow()
            .as_ref()
            .is_some_and(TaskHandle::is_pending)
    }

    /// Cancel whatever is in flight and stop notifying.
    pub fn teardown(&self) {
        self.inner.torn_down.set(true);
        self.inner.cancel_pending();
        self.inner.listener.borrow_mut().take();
        log::info!("[contact] teardown in {}", self.phase().label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_machine_rejects_out_of_order_steps() {
        let mut s = ContactFormState::new();
        assert!(!s.complete_submit());
        assert!(!s.finish_display());
        assert!(matches!(s.begin_submit(), Err(FolioError::IncompleteForm("name"))));
        s.set_field(ContactField::Name, "Ada");
        s.set_field(ContactField::Email, "ada@example.com");
        s.set_field(ContactField::Message, "   ");
        assert!(matches!(s.begin_submit(), Err(FolioError::IncompleteForm("message"))));
        s.set_field(ContactField::Message, "hello");
        assert!(s.begin_submit().is_ok());
        assert!(matches!(s.begin_submit(), Err(FolioError::FormBusy("submitting"))));
        assert!(s.complete_submit());
        assert!(!s.set_field(ContactField::Name, "ignored"));
        assert!(s.finish_display());
        assert_eq!(s, ContactFormState::new());
    }

    #[test]
    fn abort_keeps_fields() {
        let mut s = ContactFormState::new();
        for f in ContactField::ALL {
            s.set_field(f, "x");
        }
        assert!(s.begin_submit().is_ok());
        assert!(s.abort_submit());
        assert_eq!(s.phase(), SubmitPhase::Idle);
        assert_eq!(s.name, "x");
    }

    #[test]
    fn field_names_round_trip() {
        for f in ContactField::ALL {
            assert_eq!(ContactField::from_name(f.name()), Some(f));
        }
        assert_eq!(ContactField::from_name("phone"), None);
    }
}
