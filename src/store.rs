//! Stats store
//!
//! Owns the in-memory `UserStats` record and its persistence. All durable
//! storage reads and writes for the subsystem are confined to this module.

use tracing::{debug, warn};

use crate::db::StatsDb;
use crate::definitions::ACHIEVEMENTS;
use crate::models::{AchievementState, UserStats};

/// Fixed key of the achievement record in durable storage
pub const STORAGE_KEY: &str = "nidam_achievements";

/// Holds the current record and the optional storage backend.
///
/// A store without a backend (detached context) skips every load and save
/// and keeps serving the in-memory defaults.
pub struct StatsStore {
    db: Option<StatsDb>,
    stats: UserStats,
}

impl StatsStore {
    pub fn new(db: Option<StatsDb>) -> Self {
        Self {
            db,
            stats: UserStats::default(),
        }
    }

    /// Whether durable storage is available in this context
    pub fn is_persistent(&self) -> bool {
        self.db.is_some()
    }

    /// Replace the in-memory record with the stored one, if present.
    ///
    /// A missing or malformed record falls back to defaults; corruption is
    /// logged but never propagated.
    pub fn load(&mut self) {
        let Some(db) = &self.db else { return };

        let raw = match db.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored achievement record, starting fresh");
                return;
            }
            Err(e) => {
                warn!("Failed to read achievement record: {e:#}");
                return;
            }
        };

        match serde_json::from_str::<UserStats>(&raw) {
            Ok(stored) => {
                self.stats = reconcile_with_catalog(stored);
                debug!(
                    daily_logins = self.stats.daily_logins,
                    total_messages = self.stats.total_messages,
                    "Loaded achievement record"
                );
            }
            Err(e) => {
                warn!("Malformed achievement record, resetting to defaults: {e}");
                self.stats = UserStats::default();
            }
        }
    }

    /// Serialize the current record and overwrite the stored value.
    ///
    /// Failures are logged and swallowed; a tracking call must never fail
    /// because the disk did.
    pub fn save(&self) {
        let Some(db) = &self.db else { return };

        match serde_json::to_string(&self.stats) {
            Ok(raw) => {
                if let Err(e) = db.put(STORAGE_KEY, &raw) {
                    warn!("Failed to persist achievement record: {e:#}");
                }
            }
            Err(e) => warn!("Failed to serialize achievement record: {e}"),
        }
    }

    /// Current counters and achievement snapshot
    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut UserStats {
        &mut self.stats
    }

    /// Achievement snapshot, catalog order
    pub fn achievements(&self) -> &[AchievementState] {
        &self.stats.achievements
    }

    /// Reset to first-run defaults and persist the fresh record
    pub fn reset(&mut self) {
        self.stats = UserStats::default();
        self.save();
    }
}

/// Rebuild the achievements list in catalog order.
///
/// Stored entries are matched by id; definitions added since the record
/// was written get fresh locked states; display metadata always comes
/// from the current catalog.
fn reconcile_with_catalog(mut stored: UserStats) -> UserStats {
    let achievements: Vec<AchievementState> = ACHIEVEMENTS
        .iter()
        .map(|def| {
            match stored.achievements.iter().position(|a| a.id == def.id) {
                Some(i) => {
                    let mut state = stored.achievements.swap_remove(i);
                    state.refresh_metadata(def);
                    state
                }
                None => AchievementState::fresh(def),
            }
        })
        .collect();
    stored.achievements = achievements;
    stored
}
