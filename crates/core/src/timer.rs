//! One-shot deferred tasks driven by the fixed-timestep game loop.
//!
//! The scheduler keeps its own millisecond clock. [`Scheduler::advance`] moves
//! the clock forward and hands back every task whose delay has fully elapsed,
//! ordered by due time and then by scheduling order. A task fires once and is
//! then forgotten; cancelled tasks never fire.

/// Handle returned by [`Scheduler::schedule`], used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TimerId,
    due_ms: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `task` to fire once `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms + u64::from(delay_ms),
            task,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Move the clock forward and return the tasks that came due.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<T> {
        self.now_ms += u64::from(elapsed_ms);
        let now = self.now_ms;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due_ms, p.id));
        due.into_iter().map(|p| p.task).collect()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_once_after_delay() {
        let mut s = Scheduler::new();
        s.schedule(1000, "resolve");

        assert!(s.advance(999).is_empty());
        assert_eq!(s.advance(1), vec!["resolve"]);
        assert!(s.advance(5000).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn test_due_order_then_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule(300, 'c');
        s.schedule(100, 'a');
        s.schedule(300, 'd');
        s.schedule(200, 'b');

        assert_eq!(s.advance(1000), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let keep = s.schedule(50, 1);
        let drop = s.schedule(50, 2);

        assert!(s.cancel(drop));
        assert!(!s.cancel(drop));
        assert_eq!(s.advance(50), vec![1]);
        assert!(!s.cancel(keep));
    }

    #[test]
    fn test_delay_is_relative_to_current_clock() {
        let mut s = Scheduler::new();
        s.advance(500);
        s.schedule(100, ());
        assert!(s.advance(99).is_empty());
        assert_eq!(s.advance(1).len(), 1);
        assert!(s.is_empty());
    }
}
