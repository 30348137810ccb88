use crate::task::TaskHandle;
use smallvec::SmallVec;

/// Undo action for one acquired effect: a listener, an observer, a frame
/// subscription, a pending timer. Runs at most once, on `dispose` or on drop.
#[must_use = "dropping a Disposer runs it immediately"]
pub struct Disposer(Option<Box<dyn FnOnce()>>);

impl Disposer {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(f)))
    }

    /// For effects that were never acquired (element missing, motion reduced).
    pub fn noop() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    pub fn dispose(mut self) {
        self.run();
    }

    /// Drop the undo action without running it.
    pub fn forget(mut self) {
        self.0 = None;
    }

    fn run(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.run();
    }
}

impl From<TaskHandle> for Disposer {
    fn from(handle: TaskHandle) -> Self {
        Disposer::new(move || {
            handle.cancel();
        })
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Disposer").field(&self.is_armed()).finish()
    }
}

/// Every effect a component acquired while mounted. Disposing the scope runs
/// all disposers in reverse acquisition order, exactly once.
#[derive(Debug, Default)]
pub struct EffectScope {
    disposers: SmallVec<[Disposer; 4]>,
    disposed: bool,
}

impl EffectScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects added after the scope is torn down are undone immediately.
    pub fn add(&mut self, disposer: Disposer) {
        if self.disposed {
            disposer.dispose();
        } else {
            self.disposers.push(disposer);
        }
    }

    pub fn add_fn(&mut self, f: impl FnOnce() + 'static) {
        self.add(Disposer::new(f));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns how many disposers ran; zero on a second call.
    pub fn dispose(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        self.disposed = true;
        let mut ran = 0;
        while let Some(d) = self.disposers.pop() {
            if d.is_armed() {
                ran += 1;
            }
            d.dispose();
        }
        ran
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn disposes_in_reverse_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = EffectScope::new();
        for i in 0..6 {
            let log = log.clone();
            scope.add_fn(move || log.borrow_mut().push(i));
        }
        scope.add(Disposer::noop());
        assert_eq!(scope.dispose(), 6);
        assert_eq!(scope.dispose(), 0);
        drop(scope);
        assert_eq!(*log.borrow(), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn late_additions_run_immediately() {
        let hit = Rc::new(RefCell::new(0));
        let mut scope = EffectScope::new();
        scope.dispose();
        let hit_cb = hit.clone();
        scope.add_fn(move || *hit_cb.borrow_mut() += 1);
        assert_eq!(*hit.borrow(), 1);
        assert!(scope.is_empty());
    }

    #[test]
    fn drop_disposes() {
        let hit = Rc::new(RefCell::new(false));
        {
            let mut scope = EffectScope::new();
            let hit = hit.clone();
            scope.add_fn(move || *hit.borrow_mut() = true);
        }
        assert!(*hit.borrow());
    }

    #[test]
    fn task_disposer_cancels() {
        let handle = TaskHandle::new();
        let d: Disposer = handle.clone().into();
        d.dispose();
        assert!(!handle.is_pending());
    }
}
