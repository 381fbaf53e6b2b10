//! Notifications about absent [`Employee`]s.

use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{self, AtomicU64},
        Arc,
    },
};

use common::DateTimeOf;
use derive_more::Display;
use parking_lot::RwLock;
use tracing as log;

use crate::domain::Employee;

/// Marker type describing an absence report.
#[derive(Clone, Copy, Debug)]
pub struct Report;

/// [`DateTime`] when an [`Absence`] was reported.
///
/// [`DateTime`]: common::DateTime
pub type ReportDateTime = DateTimeOf<(Employee, Report)>;

/// Event of an [`Employee`] being absent.
#[derive(Clone, Copy, Debug)]
pub struct Absence<'e> {
    /// Absent [`Employee`].
    pub employee: &'e Employee,

    /// [`DateTime`] when this [`Absence`] was reported.
    ///
    /// [`DateTime`]: common::DateTime
    pub reported_at: ReportDateTime,
}

/// Handle of a listener attached to a [`Notifier`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

/// Listener of [`Absence`]s.
type Listener = Arc<dyn Fn(&Absence<'_>) + Send + Sync>;

/// Channel of [`Absence`] notifications.
///
/// Listeners are invoked synchronously by [`Notifier::publish()`], in no
/// particular order. Clones share the same set of listeners.
#[derive(Clone, Default)]
pub struct Notifier {
    /// Shared state of this [`Notifier`].
    inner: Arc<Inner>,
}

/// Shared state of a [`Notifier`].
#[derive(Default)]
struct Inner {
    /// Counter of issued [`Subscription`]s.
    last_id: AtomicU64,

    /// Attached listeners.
    listeners: RwLock<HashMap<Subscription, Listener>>,
}

impl Notifier {
    /// Attaches the provided `listener`, returning the [`Subscription`] to
    /// detach it with.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Absence<'_>) + Send + Sync + 'static,
    {
        let id = Subscription(
            self.inner.last_id.fetch_add(1, atomic::Ordering::Relaxed) + 1,
        );
        drop(self.inner.listeners.write().insert(id, Arc::new(listener)));
        id
    }

    /// Detaches the listener of the provided [`Subscription`].
    ///
    /// Returns `false` if it was detached already.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner
            .listeners
            .write()
            .remove(&subscription)
            .is_some()
    }

    /// Returns the number of attached listeners.
    #[must_use]
    pub fn subscribers(&self) -> usize {
        self.inner.listeners.read().len()
    }

    /// Notifies all the attached listeners about the provided [`Absence`],
    /// returning how many were notified.
    ///
    /// Listeners may (un)subscribe from inside their invocation.
    pub fn publish(&self, absence: &Absence<'_>) -> usize {
        let listeners =
            self.inner.listeners.read().values().cloned().collect::<Vec<_>>();
        for listener in &listeners {
            listener(absence);
        }
        log::debug!(
            "`Employee(id: {})` absence reported at {} delivered to {} \
             listener(s)",
            absence.employee.id(),
            absence.reported_at.to_rfc3339(),
            listeners.len(),
        );
        listeners.len()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers())
            .finish()
    }
}
