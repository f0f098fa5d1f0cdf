// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The single application store.
//!
//! `get` hands out the current snapshot; `set` replaces it wholesale and
//! notifies subscribers. There is no queueing and no merging: a use case
//! composes all of its changes locally and writes exactly once, so
//! subscribers never observe an intermediate state. A second writer's `set`
//! unconditionally overwrites; callers serialize use-case invocations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::state::app_state::AppState;

/// Handle returned by [`AppStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type SubscriberFn = Box<dyn Fn(&Arc<AppState>) + Send + Sync>;

/// Holds the current [`AppState`] snapshot.
pub struct AppStore {
    state: Mutex<Arc<AppState>>,
    subscribers: Mutex<Vec<(SubscriptionId, SubscriberFn)>>,
    next_subscription: AtomicU64,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Mutex::new(Arc::new(initial)),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// The current snapshot. Cheap; shares the underlying state.
    pub fn get(&self) -> Arc<AppState> {
        self.state.lock().expect("app store lock poisoned").clone()
    }

    /// Replaces the snapshot and synchronously notifies subscribers.
    pub fn set(&self, state: AppState) {
        let state = Arc::new(state);
        *self.state.lock().expect("app store lock poisoned") = state.clone();

        // Subscribers must not subscribe/unsubscribe from inside the callback.
        let subscribers = self
            .subscribers
            .lock()
            .expect("app store subscribers lock poisoned");
        for (_, subscriber) in subscribers.iter() {
            subscriber(&state);
        }
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Arc<AppState>) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("app store subscribers lock poisoned")
            .push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("app store subscribers lock poisoned")
            .retain(|(registered, _)| *registered != id);
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore").finish_non_exhaustive()
    }
}
