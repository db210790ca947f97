//! Deterministic timer queue
//!
//! Each session owns exactly one queue and pumps it once per frame via
//! [`Timers::advance`]. Firing returns plain event values that the caller
//! dispatches, so no callback ever runs concurrently with another from the
//! same session. A session reset drops the queue contents, which makes a
//! stale fire against a superseded session impossible.

use std::cmp::Ordering;

/// Opaque handle for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    handle: TimerHandle,
    /// Absolute deadline in seconds on the queue's own clock
    deadline: f64,
    /// Reschedule interval for repeating timers
    period: Option<f64>,
    event: E,
}

/// Timer queue with second-resolution deadlines
#[derive(Debug, Clone)]
pub struct Timers<E> {
    now: f64,
    next_id: u64,
    entries: Vec<Entry<E>>,
}

/// Tolerance for float accumulation across many small frames
const EPSILON: f64 = 1e-6;

impl<E: Copy> Timers<E> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Schedule `event` every `interval` seconds; first fire after one
    /// full interval.
    pub fn repeating(&mut self, interval: f32, event: E) -> TimerHandle {
        self.push(interval, Some(interval), event)
    }

    /// Schedule `event` once, `delay` seconds from now.
    pub fn once(&mut self, delay: f32, event: E) -> TimerHandle {
        self.push(delay, None, event)
    }

    fn push(&mut self, delay: f32, period: Option<f32>, event: E) -> TimerHandle {
        // A zero period would fire forever within one advance
        let delay = delay.max(1e-3) as f64;
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline: self.now + delay,
            period: period.map(|p| p.max(1e-3) as f64),
            event,
        });
        handle
    }

    /// Cancel a pending timer. Idempotent: unknown or already-fired
    /// handles are a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.handle != handle);
    }

    /// Drop every pending timer (session reset / teardown)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending entries
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Advance the clock by `dt` seconds and collect fired events in
    /// deadline order (ties break by registration order).
    ///
    /// Repeating timers reschedule from their deadline rather than from
    /// the new clock value, so a large `dt` yields one fire per elapsed
    /// interval - the host event loop may coalesce frames and sessions
    /// must tolerate the drift.
    pub fn advance(&mut self, dt: f32) -> Vec<E> {
        self.now += dt.max(0.0) as f64;
        let mut fired = Vec::new();

        loop {
            let due = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.deadline <= self.now + EPSILON)
                .min_by(|(_, a), (_, b)| {
                    a.deadline
                        .partial_cmp(&b.deadline)
                        .unwrap_or(Ordering::Equal)
                        .then(a.handle.0.cmp(&b.handle.0))
                })
                .map(|(i, _)| i);

            let Some(i) = due else { break };
            fired.push(self.entries[i].event);
            match self.entries[i].period {
                Some(p) => self.entries[i].deadline += p,
                None => {
                    self.entries.swap_remove(i);
                }
            }
        }

        fired
    }
}

impl<E: Copy> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}
