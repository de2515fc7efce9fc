//! Achievement manager
//!
//! Public surface of the subsystem: wires the store, evaluator, streak
//! tracker, and notifier together behind explicitly constructed lifecycle.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tracing::{info, warn};

use crate::checker;
use crate::db::StatsDb;
use crate::definitions::AchievementId;
use crate::models::{AchievementState, UserStats};
use crate::notifier::UnlockNotifier;
use crate::store::StatsStore;
use crate::streaks;

/// Central manager for achievement tracking.
///
/// One instance per execution context, constructed and initialized by the
/// host. All operations are synchronous and run to completion; tracking
/// calls never return errors to the caller.
pub struct AchievementManager {
    store: StatsStore,
    notifier: UnlockNotifier,
}

impl AchievementManager {
    /// Create a manager backed by the default database location.
    ///
    /// If the database cannot be opened the manager degrades to a detached
    /// instance that serves defaults and skips persistence; storage being
    /// unavailable is not an error.
    pub fn new() -> Self {
        match StatsDb::open_default() {
            Ok(db) => Self::with_db(db),
            Err(e) => {
                warn!("Durable storage unavailable, running detached: {e:#}");
                Self::detached()
            }
        }
    }

    /// Create a manager backed by a database at a specific path
    pub fn with_path(path: &Path) -> Result<Self> {
        Ok(Self::with_db(StatsDb::open(path)?))
    }

    /// Create a manager backed by an already-open database
    pub fn with_db(db: StatsDb) -> Self {
        Self {
            store: StatsStore::new(Some(db)),
            notifier: UnlockNotifier::new(),
        }
    }

    /// Create a manager without durable storage.
    ///
    /// Tracking calls are ignored and queries answer with defaults.
    pub fn detached() -> Self {
        Self {
            store: StatsStore::new(None),
            notifier: UnlockNotifier::new(),
        }
    }

    /// Load persisted state and run the daily login check.
    ///
    /// Safe to call repeatedly; the login transition only fires on the
    /// first initialization of a calendar day.
    pub fn init(&mut self) {
        if !self.store.is_persistent() {
            return;
        }
        self.store.load();
        self.check_daily_login();
    }

    /// Flush state and drop all registered listeners
    pub fn dispose(&mut self) {
        self.store.save();
        self.notifier.clear();
    }

    /// Register a listener for achievement unlock events
    pub fn on_unlock(&mut self, listener: impl FnMut(&AchievementState) + Send + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Record one sent message
    pub fn track_message(&mut self) {
        if !self.store.is_persistent() {
            return;
        }
        self.store.stats_mut().total_messages += 1;
        self.evaluate_and_persist();
    }

    /// Record one shared conversation
    pub fn track_shared_conversation(&mut self) {
        if !self.store.is_persistent() {
            return;
        }
        self.store.stats_mut().total_conversations_shared += 1;
        self.evaluate_and_persist();
    }

    /// Record `amount` generated tokens
    pub fn track_tokens_generated(&mut self, amount: u64) {
        if !self.store.is_persistent() {
            return;
        }
        let stats = self.store.stats_mut();
        stats.total_tokens_generated = stats.total_tokens_generated.saturating_add(amount);
        self.evaluate_and_persist();
    }

    /// Current counters and achievement snapshot
    pub fn stats(&self) -> &UserStats {
        self.store.stats()
    }

    /// Achievement snapshot, catalog order
    pub fn achievements(&self) -> &[AchievementState] {
        self.store.achievements()
    }

    /// Number of unlocked achievements
    pub fn unlocked_count(&self) -> usize {
        self.store
            .achievements()
            .iter()
            .filter(|a| a.is_unlocked())
            .count()
    }

    /// Whether a specific achievement is unlocked
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.store
            .achievements()
            .iter()
            .any(|a| a.id == id && a.is_unlocked())
    }

    /// Reset all progress to first-run state and persist it
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Count today as a login day if it has not been counted yet
    fn check_daily_login(&mut self) {
        let today = Local::now().date_naive();
        if streaks::apply_daily_login(self.store.stats_mut(), today) {
            let stats = self.store.stats();
            info!(
                daily_logins = stats.daily_logins,
                consecutive_logins = stats.consecutive_logins,
                "First visit of the day"
            );
            self.evaluate_and_persist();
        }
    }

    /// Run the evaluator, notify new unlocks, write the record back
    fn evaluate_and_persist(&mut self) {
        let newly_unlocked = checker::run_checks(self.store.stats_mut(), Local::now());
        for achievement in &newly_unlocked {
            self.notifier.notify(achievement);
        }
        self.store.save();
    }
}

impl Default for AchievementManager {
    fn default() -> Self {
        Self::new()
    }
}
