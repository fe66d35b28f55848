// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notifications in display order. Every
//! enqueue schedules exactly one [`Expiry`]; the application turns it into a
//! timer task whose only effect is removing that id if it is still present.
//! Removal is always by id, so a timer firing after an explicit dismiss (or
//! after an eviction) is a no-op.

use super::notification::{Kind, Notification, NotificationId};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::domain::ui::{ToastCapacity, ToastDuration};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a notification.
    Dismiss(NotificationId),
    /// The notification's timer fired.
    Expired(NotificationId),
}

/// A deferred removal scheduled by [`Manager::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    id: NotificationId,
    after: Duration,
}

impl Expiry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Delay between enqueue and removal.
    #[must_use]
    pub fn after(&self) -> Duration {
        self.after
    }

    /// Sleeps for the scheduled delay, then yields the id to remove.
    pub async fn elapsed(self) -> NotificationId {
        tokio::time::sleep(self.after).await;
        self.id
    }
}

/// Manages the active notifications and their pending expiries.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications, oldest first.
    active: VecDeque<Notification>,
    /// Expiries not yet handed to the runtime.
    scheduled: Vec<Expiry>,
    /// Duration used when the caller gives none.
    default_duration: ToastDuration,
    /// Optional cap on active notifications; oldest are evicted first.
    capacity: Option<ToastCapacity>,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates an empty, unbounded manager with the 3 s default duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with a custom default duration and cap.
    #[must_use]
    pub fn with_settings(default_duration: ToastDuration, capacity: Option<ToastCapacity>) -> Self {
        Self {
            default_duration,
            capacity,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a notification and schedules its removal.
    ///
    /// `duration` falls back to the manager default when `None`. A zero
    /// duration is raised to 100 ms and logged as a diagnostics warning;
    /// any positive duration is kept. Returns the new id immediately.
    pub fn enqueue(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        duration: Option<Duration>,
    ) -> NotificationId {
        let duration = self.resolve_duration(duration);
        let notification = Notification::new(kind, message, duration);
        let id = notification.id();

        self.log(&notification);

        if let Some(capacity) = self.capacity {
            while self.active.len() >= capacity.value() {
                self.active.pop_front();
            }
        }

        self.active.push_back(notification);
        self.scheduled.push(Expiry {
            id,
            after: duration.as_duration(),
        });
        id
    }

    /// Enqueues a success notification.
    pub fn success(&mut self, message: impl Into<String>, duration: Option<Duration>) -> NotificationId {
        self.enqueue(message, Kind::Success, duration)
    }

    /// Enqueues an error notification.
    pub fn error(&mut self, message: impl Into<String>, duration: Option<Duration>) -> NotificationId {
        self.enqueue(message, Kind::Error, duration)
    }

    /// Enqueues a warning notification.
    pub fn warning(&mut self, message: impl Into<String>, duration: Option<Duration>) -> NotificationId {
        self.enqueue(message, Kind::Warning, duration)
    }

    /// Enqueues an info notification.
    pub fn info(&mut self, message: impl Into<String>, duration: Option<Duration>) -> NotificationId {
        self.enqueue(message, Kind::Info, duration)
    }

    /// Removes the notification with `id` if it is still active.
    ///
    /// Returns `true` if something was removed. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id() != id);
        self.active.len() < before
    }

    /// Handles a notification message.
    ///
    /// Returns `true` if a notification was removed.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => self.dismiss(*id),
        }
    }

    /// Hands over the expiries scheduled since the last call.
    pub fn take_scheduled(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.scheduled)
    }

    /// Returns the active notifications in display (insertion) order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the active notification with `id`, if any.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Removes every active notification. Pending expiries become no-ops.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration.as_duration()
    }

    fn resolve_duration(&self, requested: Option<Duration>) -> ToastDuration {
        let Some(requested) = requested else {
            return self.default_duration;
        };

        let millis = u64::try_from(requested.as_millis()).unwrap_or(u64::MAX);
        let duration = ToastDuration::from_millis(millis);
        if ToastDuration::needs_fallback(millis) {
            if let Some(handle) = &self.diagnostics {
                handle.log_warning(WarningEvent::new(
                    WarningType::DurationClamped,
                    format!("requested {millis}ms, using {}ms", duration.millis()),
                ));
            }
        }
        duration
    }

    fn log(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match notification.kind() {
            Kind::Warning => handle.log_warning(WarningEvent::new(
                WarningType::Notification,
                notification.message(),
            )),
            Kind::Error => handle.log_error(ErrorEvent::new(
                ErrorType::Notification,
                notification.message(),
            )),
            Kind::Success | Kind::Info => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    /// Deterministic stand-in for the runtime's timers.
    #[derive(Default)]
    struct FakeTimers {
        now: Duration,
        pending: Vec<(Duration, NotificationId)>,
    }

    impl FakeTimers {
        fn schedule_from(&mut self, manager: &mut Manager) {
            for expiry in manager.take_scheduled() {
                self.pending.push((self.now + expiry.after(), expiry.id()));
            }
        }

        fn advance(&mut self, by: Duration, manager: &mut Manager) {
            self.now += by;
            self.pending.sort_by_key(|(due, _)| *due);
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = rest;
            for (_, id) in due {
                manager.handle_message(&Message::Expired(id));
            }
        }
    }

    fn messages(manager: &Manager) -> Vec<&str> {
        manager.active().map(Notification::message).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.default_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn enqueue_returns_id_and_schedules_one_expiry() {
        let mut manager = Manager::new();
        let id = manager.enqueue("Saved", Kind::Success, Some(Duration::from_millis(100)));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(id).map(Notification::kind), Some(Kind::Success));

        let scheduled = manager.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].id(), id);
        assert_eq!(scheduled[0].after(), Duration::from_millis(100));
        assert!(manager.take_scheduled().is_empty());
    }

    #[test]
    fn notification_expires_after_its_duration() {
        let mut manager = Manager::new();
        let mut timers = FakeTimers::default();

        manager.enqueue("Saved", Kind::Success, Some(Duration::from_millis(100)));
        timers.schedule_from(&mut manager);
        assert_eq!(manager.len(), 1);

        timers.advance(Duration::from_millis(99), &mut manager);
        assert_eq!(manager.len(), 1);

        timers.advance(Duration::from_millis(1), &mut manager);
        assert!(manager.is_empty());
    }

    #[test]
    fn display_order_is_insertion_order() {
        let mut manager = Manager::new();
        manager.enqueue("A", Kind::Info, None);
        manager.enqueue("B", Kind::Info, None);
        assert_eq!(messages(&manager), vec!["A", "B"]);
    }

    #[test]
    fn typed_wrappers_fix_the_kind() {
        let mut manager = Manager::new();
        let s = manager.success("s", None);
        let e = manager.error("e", None);
        let w = manager.warning("w", None);
        let i = manager.info("i", None);

        assert_eq!(manager.get(s).map(Notification::kind), Some(Kind::Success));
        assert_eq!(manager.get(e).map(Notification::kind), Some(Kind::Error));
        assert_eq!(manager.get(w).map(Notification::kind), Some(Kind::Warning));
        assert_eq!(manager.get(i).map(Notification::kind), Some(Kind::Info));
        assert_eq!(manager.take_scheduled().len(), 4);
    }

    #[test]
    fn default_duration_applies_when_none_given() {
        let mut manager = Manager::with_settings(ToastDuration::from_millis(1500), None);
        let id = manager.info("hello", None);
        assert_eq!(
            manager.get(id).map(Notification::duration),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn dismiss_is_idempotent_and_targets_only_its_id() {
        let mut manager = Manager::new();
        let a = manager.info("A", None);
        manager.info("B", None);

        assert!(manager.dismiss(a));
        assert!(!manager.dismiss(a));
        assert_eq!(messages(&manager), vec!["B"]);
    }

    #[test]
    fn timer_after_explicit_dismiss_is_a_no_op() {
        let mut manager = Manager::new();
        let mut timers = FakeTimers::default();

        let a = manager.enqueue("A", Kind::Info, Some(Duration::from_millis(200)));
        timers.schedule_from(&mut manager);
        timers.advance(Duration::from_millis(50), &mut manager);
        manager.enqueue("B", Kind::Info, Some(Duration::from_millis(1000)));
        timers.schedule_from(&mut manager);

        assert!(manager.handle_message(&Message::Dismiss(a)));
        timers.advance(Duration::from_millis(200), &mut manager);

        assert_eq!(messages(&manager), vec!["B"]);
    }

    #[test]
    fn active_count_equals_enqueues_minus_removals() {
        let mut manager = Manager::new();
        let mut timers = FakeTimers::default();
        let mut removed = 0;

        let ids: Vec<_> = (0..6u64)
            .map(|i| {
                manager.enqueue(
                    format!("n{i}"),
                    Kind::Info,
                    Some(Duration::from_millis(100 * (i + 1))),
                )
            })
            .collect();
        timers.schedule_from(&mut manager);

        if manager.dismiss(ids[4]) {
            removed += 1;
        }
        assert_eq!(manager.len(), ids.len() - removed);

        // n0, n1 and n2 expire; n4 was already gone
        timers.advance(Duration::from_millis(300), &mut manager);
        removed += 3;
        assert_eq!(manager.len(), ids.len() - removed);

        timers.advance(Duration::from_millis(1000), &mut manager);
        assert!(manager.is_empty());
    }

    #[test]
    fn zero_duration_is_raised_and_logged() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        let id = manager.info("quick", Some(Duration::ZERO));
        assert_eq!(
            manager.get(id).map(Notification::duration),
            Some(Duration::from_millis(100))
        );

        collector.process_pending();
        assert!(collector.events().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::DurationClamped
        )));
    }

    #[test]
    fn long_duration_is_scheduled_as_requested() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        let id = manager.info("long", Some(Duration::from_secs(90)));
        let scheduled = manager.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].id(), id);
        assert_eq!(scheduled[0].after(), Duration::from_secs(90));

        collector.process_pending();
        assert!(!collector.events().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::DurationClamped
        )));
    }

    #[test]
    fn warnings_and_errors_are_logged_but_success_is_not() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.success("ok", None);
        manager.info("fyi", None);
        manager.warning("careful", None);
        manager.error("broken", None);

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut manager = Manager::with_settings(ToastDuration::default(), Some(ToastCapacity::new(2)));
        let mut timers = FakeTimers::default();

        manager.info("A", None);
        manager.info("B", None);
        manager.info("C", None);
        timers.schedule_from(&mut manager);

        assert_eq!(messages(&manager), vec!["B", "C"]);

        // A's timer still fires; it must not remove anything else
        timers.advance(Duration::from_millis(2999), &mut manager);
        assert_eq!(manager.len(), 2);
        timers.advance(Duration::from_millis(1), &mut manager);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.info(format!("n{i}"), None);
        }
        manager.clear();
        assert!(manager.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_future_sleeps_for_the_duration() {
        let mut manager = Manager::new();
        let id = manager.success("Saved", Some(Duration::from_millis(100)));
        let expiry = manager.take_scheduled().pop().expect("one expiry");

        let started = tokio::time::Instant::now();
        let fired = expiry.elapsed().await;

        assert_eq!(fired, id);
        assert!(started.elapsed() >= Duration::from_millis(100));
        assert!(manager.handle_message(&Message::Expired(fired)));
        assert!(manager.is_empty());
    }
}
