//! Timer seam for delayed work.
//!
//! Everything that waits on a wall-clock delay (debounce, zoom reversion, the
//! gallery stagger) goes through [`Scheduler`], so the state machines can be
//! driven by [`testing::ManualScheduler`] in unit tests.

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not fired yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// `setTimeout` via gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod testing {
    use super::{Scheduler, Task};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        seq: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock; tasks only run inside [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of tasks still waiting to fire.
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .pending
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        /// Moves the clock forward, firing due tasks in due-time order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.pending.retain(|p| !p.cancelled.get());
                    let idx = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    idx.map(|i| {
                        let pending = clock.pending.remove(i);
                        clock.now = pending.due;
                        pending
                    })
                };
                match next {
                    // Borrow released before running, tasks may schedule more work.
                    Some(pending) => (pending.task)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let cancelled = Rc::new(Cell::new(false));
            let seq = clock.seq;
            clock.seq += 1;
            let due = clock.now + delay_ms as u64;
            clock.pending.push(Pending {
                due,
                seq,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }

    mod tests {
        use super::*;

        #[test]
        fn test_fires_in_due_order() {
            let scheduler = ManualScheduler::new();
            let log = Rc::new(RefCell::new(Vec::new()));
            let handles: Vec<_> = [(30, "c"), (10, "a"), (20, "b")]
                .into_iter()
                .map(|(delay, name)| {
                    let log = log.clone();
                    scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(name)))
                })
                .collect();

            scheduler.advance(25);
            assert_eq!(*log.borrow(), vec!["a", "b"]);
            scheduler.advance(5);
            assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
            drop(handles);
        }

        #[test]
        fn test_dropped_handle_cancels() {
            let scheduler = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));
            let handle = {
                let fired = fired.clone();
                scheduler.schedule(10, Box::new(move || fired.set(true)))
            };
            drop(handle);
            scheduler.advance(100);
            assert!(!fired.get());
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
