use std::cell::RefCell;
use std::rc::Rc;

use crate::timer::{BrowserScheduler, Scheduler};

/// Trailing-edge debounce: the wrapped callback runs once `wait_ms` after the
/// last [`Debounced::call`], with that call's arguments. Pass a tuple for
/// more than one argument.
pub struct Debounced<A, S: Scheduler = BrowserScheduler> {
    callback: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

pub fn debounce<A, F>(wait_ms: u32, callback: F) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced::with_scheduler(BrowserScheduler, wait_ms, callback)
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn with_scheduler<F>(scheduler: S, wait_ms: u32, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            callback: Rc::new(callback),
            wait_ms,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, args: A) {
        let callback = self.callback.clone();
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || callback(args)));
        // Replacing drops the previous handle, which cancels its timer.
        self.pending.replace(Some(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualScheduler;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<(u32, &'static str)>>>, impl Fn((u32, &'static str))) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |args: (u32, &'static str)| sink.borrow_mut().push(args))
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let scheduler = ManualScheduler::new();
        let (calls, callback) = recorder();
        let debounced = Debounced::with_scheduler(scheduler.clone(), 100, callback);

        for (i, label) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            debounced.call((i as u32, label));
            scheduler.advance(50);
        }
        assert!(calls.borrow().is_empty());

        scheduler.advance(50);
        assert_eq!(*calls.borrow(), vec![(4, "e")]);

        scheduler.advance(1_000);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let scheduler = ManualScheduler::new();
        let (calls, callback) = recorder();
        let debounced = Debounced::with_scheduler(scheduler.clone(), 10, callback);

        debounced.call((1, "first"));
        scheduler.advance(10);
        debounced.call((2, "second"));
        scheduler.advance(10);

        assert_eq!(*calls.borrow(), vec![(1, "first"), (2, "second")]);
    }

    #[test]
    fn test_drop_discards_pending_call() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let debounced = Debounced::with_scheduler(scheduler.clone(), 20, move |()| {
            counter.set(counter.get() + 1)
        });
        debounced.call(());
        scheduler.advance(20);
        assert_eq!(hits.get(), 1);

        debounced.call(());
        drop(debounced);
        scheduler.advance(50);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.now(), 70);
    }
}
