//! Cancellable, last-write-wins delayed commits.
//!
//! Every keystroke in a search box calls [`Model::push`]. The debouncer keeps
//! only the latest value and hands back a tick command that fires after the
//! delay. Each push bumps an internal tag; a tick only commits if its tag is
//! still the latest one, so earlier ticks are cancelled simply by being stale.
//!
//! A tick already handed to the runtime cannot be recalled; it always fires.
//! Cancelling (or dropping the debouncer) only makes it stale. Ticks from a
//! dropped debouncer are harmless because their id belongs to no live
//! debouncer, and every debouncer ignores ticks carrying another id.
//!
//! # bubbletea-rs integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use esaku_listview::debounce;
//! use std::time::Duration;
//!
//! struct Search {
//!     debounce: debounce::Model,
//!     term: String,
//! }
//!
//! impl BubbleTeaModel for Search {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let debounce = debounce::new(Duration::from_millis(300));
//!         (Self { debounce, term: String::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(term) = self.debounce.update(&msg) {
//!             self.term = term;
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.term.clone()
//!     }
//! }
//! ```
//!
//! Hosts without a runtime can drive the same state with [`Model::push_at`]
//! and [`Model::poll`].

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

/// Delay used by the table views' search boxes.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered when a scheduled commit's delay has elapsed.
///
/// Only the debouncer that produced it, and only for its latest push, will
/// accept it.
#[derive(Debug, Clone)]
pub struct DebounceMsg {
    /// Id of the debouncer that scheduled the commit.
    pub id: i64,
    /// The value pushed when the commit was scheduled. Informational only:
    /// [`Model::update`] commits the debouncer's own pending value.
    pub value: String,
    tag: i64,
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    due: Instant,
}

/// Debouncer state.
#[derive(Debug)]
pub struct Model {
    id: i64,
    tag: i64,
    delay: Duration,
    pending: Option<Pending>,
}

/// Creates a debouncer with the given quiet window.
pub fn new(delay: Duration) -> Model {
    Model {
        id: next_id(),
        tag: 0,
        delay,
        pending: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(DEFAULT_DELAY)
    }
}

impl Model {
    /// Unique id of this debouncer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The quiet window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the quiet window for subsequent pushes.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// The value waiting to be committed, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }

    /// When the pending value becomes due.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Schedules `value`, superseding any earlier pending value.
    ///
    /// The returned command resolves to a [`DebounceMsg`] after the delay;
    /// feed it back through [`update`](Self::update).
    pub fn push(&mut self, value: impl Into<String>) -> Cmd {
        self.push_at(value, Instant::now());
        self.tick()
    }

    /// Schedules `value` as if pushed at `now`, without creating a command.
    pub fn push_at(&mut self, value: impl Into<String>, now: Instant) {
        self.tag += 1;
        self.pending = Some(Pending {
            value: value.into(),
            due: now + self.delay,
        });
    }

    /// Commits the pending value if it is due at `now`.
    ///
    /// ```rust
    /// use esaku_listview::debounce;
    /// use std::time::{Duration, Instant};
    ///
    /// let mut d = debounce::new(Duration::from_millis(300));
    /// let t0 = Instant::now();
    /// d.push_at("a", t0);
    /// d.push_at("ab", t0 + Duration::from_millis(100));
    /// assert_eq!(d.poll(t0 + Duration::from_millis(399)), None);
    /// assert_eq!(d.poll(t0 + Duration::from_millis(400)).as_deref(), Some("ab"));
    /// assert_eq!(d.poll(t0 + Duration::from_millis(900)), None);
    /// ```
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due);
        if due {
            self.take()
        } else {
            None
        }
    }

    /// Commits the pending value immediately, regardless of the delay.
    pub fn flush(&mut self) -> Option<String> {
        self.take()
    }

    /// Drops the pending value. Ticks already in flight become stale.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("debouncer {}: pending commit cancelled", self.id);
        }
        self.tag += 1;
    }

    /// Handles a [`DebounceMsg`], returning the committed value when the
    /// message belongs to the latest push.
    pub fn update(&mut self, msg: &Msg) -> Option<String> {
        let tick = msg.downcast_ref::<DebounceMsg>()?;
        if tick.id != self.id {
            return None;
        }
        if tick.tag != self.tag || self.pending.is_none() {
            log::trace!(
                "debouncer {}: stale tick {} rejected (latest {})",
                self.id,
                tick.tag,
                self.tag
            );
            return None;
        }
        self.take()
    }

    fn take(&mut self) -> Option<String> {
        // Invalidate any tick still in flight for the value being committed.
        self.tag += 1;
        self.pending.take().map(|p| p.value)
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let value = self.pending().unwrap_or_default().to_string();

        bubbletea_tick(self.delay, move |_| {
            Box::new(DebounceMsg {
                id,
                tag,
                value: value.clone(),
            }) as Msg
        })
    }

    #[cfg(test)]
    pub(crate) fn tick_msg(&self) -> Msg {
        Box::new(DebounceMsg {
            id: self.id,
            tag: self.tag,
            value: self.pending().unwrap_or_default().to_string(),
        }) as Msg
    }
}

impl Drop for Model {
    // Clears the pending value; ticks in flight still fire and are ignored by
    // the id check in `update`.
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new(ms(300));
        let b = new(ms(300));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_burst_commits_once_with_last_value() {
        let mut d = new(ms(300));
        let t0 = Instant::now();
        d.push_at("a", t0);
        d.push_at("ay", t0 + ms(50));
        d.push_at("ayu", t0 + ms(100));

        assert_eq!(d.due_at(), Some(t0 + ms(400)));
        let commits: Vec<String> = [0, 50, 100, 300, 399, 400, 450, 800]
            .into_iter()
            .filter_map(|t| d.poll(t0 + ms(t)))
            .collect();
        assert_eq!(commits, vec!["ayu".to_string()]);
        assert_eq!(d.pending(), None);
    }

    #[test]
    fn test_stale_tick_is_rejected() {
        let mut d = new(ms(300));
        let t0 = Instant::now();
        d.push_at("a", t0);
        let first = d.tick_msg();
        d.push_at("ab", t0 + ms(50));
        let second = d.tick_msg();

        assert_eq!(d.update(&first), None);
        assert_eq!(d.pending(), Some("ab"));
        assert_eq!(d.update(&second).as_deref(), Some("ab"));
        // The same tick cannot commit twice.
        assert_eq!(d.update(&second), None);
    }

    #[test]
    fn test_foreign_tick_is_ignored() {
        let mut a = new(ms(300));
        let mut b = new(ms(300));
        a.push_at("x", Instant::now());
        b.push_at("y", Instant::now());
        let from_b = b.tick_msg();
        assert_eq!(a.update(&from_b), None);
        assert_eq!(a.pending(), Some("x"));
    }

    #[test]
    fn test_cancel_drops_pending_and_in_flight_tick() {
        let mut d = new(ms(300));
        d.push_at("abc", Instant::now());
        let in_flight = d.tick_msg();
        d.cancel();
        assert_eq!(d.pending(), None);
        assert_eq!(d.update(&in_flight), None);
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn test_tick_from_dropped_debouncer_is_ignored() {
        let stale = {
            let mut old = new(ms(300));
            old.push_at("lama", Instant::now());
            old.tick_msg()
        };
        let mut fresh = new(ms(300));
        fresh.push_at("baru", Instant::now());
        assert_eq!(fresh.update(&stale), None);
        assert_eq!(fresh.pending(), Some("baru"));
    }

    #[test]
    fn test_tick_value_is_informational() {
        let mut d = new(ms(300));
        d.push_at("ayu", Instant::now());
        let tick = d.tick_msg();
        let carried = tick
            .downcast_ref::<DebounceMsg>()
            .map(|m| m.value.clone());
        assert_eq!(carried.as_deref(), Some("ayu"));
        assert_eq!(d.update(&tick).as_deref(), Some("ayu"));
    }

    #[test]
    fn test_set_delay_applies_to_next_push() {
        let mut d = new(ms(300));
        let t0 = Instant::now();
        d.push_at("a", t0);
        d.set_delay(ms(50));
        assert_eq!(d.due_at(), Some(t0 + ms(300)));
        d.push_at("ab", t0 + ms(10));
        assert_eq!(d.due_at(), Some(t0 + ms(60)));
        assert_eq!(d.delay(), ms(50));
    }

    #[test]
    fn test_flush_commits_immediately() {
        let mut d = new(ms(300));
        d.push_at("budi", Instant::now());
        assert_eq!(d.flush().as_deref(), Some("budi"));
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn test_unrelated_message_is_ignored() {
        let mut d = new(ms(300));
        d.push_at("a", Instant::now());
        let other = Box::new(42_u32) as Msg;
        assert_eq!(d.update(&other), None);
        assert_eq!(d.pending(), Some("a"));
    }

    #[tokio::test]
    async fn test_push_command_delivers_latest_value() {
        let mut d = new(ms(20));
        let stale = d.push("bu");
        let latest = d.push("budi");

        let stale_msg = stale.await.expect("tick produces a message");
        let latest_msg = latest.await.expect("tick produces a message");

        assert_eq!(d.update(&stale_msg), None);
        assert_eq!(d.update(&latest_msg).as_deref(), Some("budi"));
    }
}
