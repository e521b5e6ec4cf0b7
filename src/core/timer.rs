/// One-shot deferred callbacks, drained by the frame loop.
///
/// A timer is a payload plus a due time in milliseconds on the application
/// clock. Nothing is ever cancelled individually: whoever drains a payload
/// decides whether it is still relevant.

#[derive(Debug, Clone)]
struct Entry<T> {
    due_ms: f64,
    seq: u64,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due_ms: now_ms + delay_ms.max(0.0),
            seq,
            payload,
        });
    }

    /// Remove and return every payload due at `now_ms`, earliest first.
    /// Timers with equal due times fire in scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.due_ms <= now_ms {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;

        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.payload).collect()
    }

    #[cfg(test)]
    pub fn next_due(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_only_due_entries() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, 400.0, "wipe");
        q.schedule(0.0, 800.0, "done");

        assert!(q.drain_due(399.0).is_empty());
        assert_eq!(q.drain_due(400.0), vec!["wipe"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_due(), Some(800.0));
        assert_eq!(q.drain_due(10_000.0), vec!["done"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_due_order_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, 50.0, 3);
        q.schedule(0.0, 10.0, 1);
        q.schedule(0.0, 10.0, 2);

        assert_eq!(q.drain_due(100.0), vec![1, 2, 3]);
    }

    #[test]
    fn test_negative_delay_fires_immediately() {
        let mut q = TimerQueue::new();
        q.schedule(20.0, -5.0, ());
        assert_eq!(q.next_due(), Some(20.0));
        assert_eq!(q.drain_due(20.0).len(), 1);
    }
}
