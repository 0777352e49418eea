use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. Nothing scheduled here can be cancelled.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser timers.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let timeout = Timeout::new(delay_ms, task);
        timeout.forget();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Scheduler, Task};

    #[derive(Default)]
    struct Queue {
        now: u64,
        seq: u64,
        pending: Vec<(u64, u64, Task)>,
    }

    /// Virtual clock for tests: tasks only run when `advance` moves time past
    /// their due point, in due order, ties broken by scheduling order.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().pending.len()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now + ms;
            loop {
                // The borrow must end before the task runs, tasks may schedule more
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let (at, _, task) = queue.pending.remove(i);
                        queue.now = at;
                        task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) {
            let mut queue = self.queue.borrow_mut();
            let at = queue.now + delay_ms as u64;
            let seq = queue.seq;
            queue.seq += 1;
            queue.pending.push((at, seq, task));
        }
    }
}
