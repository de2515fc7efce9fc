//! Data models for the achievement subsystem
//!
//! These structures mirror the JSON record kept in durable storage. Field
//! names on the wire are camelCase and must stay stable across versions.

use serde::{Deserialize, Serialize};

use crate::definitions::{ACHIEVEMENTS, AchievementCategory, AchievementDef, AchievementId};

/// Lock state of a single achievement
///
/// The only allowed transition is `Locked` → `Unlocked`, performed by
/// [`AchievementState::unlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Per-achievement progress snapshot
///
/// Carries the definition metadata alongside the progress so the stored
/// record is self-describing. The lock latch fields are private; unlocking
/// goes through [`AchievementState::unlock`] and cannot be reverted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementState {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub requirement: u64,
    progress: u64,
    unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unlocked_at: Option<i64>,
}

impl AchievementState {
    /// Fresh locked state for a catalog definition
    pub fn fresh(def: &AchievementDef) -> Self {
        Self {
            id: def.id,
            name: def.name.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            category: def.category,
            requirement: def.requirement,
            progress: 0,
            unlocked: false,
            unlocked_at: None,
        }
    }

    pub fn lock_state(&self) -> LockState {
        if self.unlocked {
            LockState::Unlocked
        } else {
            LockState::Locked
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Current measured progress towards the requirement
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Unlock timestamp in epoch milliseconds, set iff unlocked
    pub fn unlocked_at(&self) -> Option<i64> {
        self.unlocked_at
    }

    /// The single allowed lock-state transition.
    ///
    /// Returns true if the achievement transitioned now, false if it was
    /// already unlocked (so an unlock can only be observed once).
    pub(crate) fn unlock(&mut self, at_ms: i64) -> bool {
        match self.lock_state() {
            LockState::Unlocked => false,
            LockState::Locked => {
                self.unlocked = true;
                self.unlocked_at = Some(at_ms);
                true
            }
        }
    }

    pub(crate) fn set_progress(&mut self, progress: u64) {
        self.progress = progress;
    }

    /// Refresh display metadata from the current catalog definition.
    ///
    /// Unlocked entries keep their stored requirement so the record stays
    /// consistent with the history they were unlocked under.
    pub(crate) fn refresh_metadata(&mut self, def: &AchievementDef) {
        self.name = def.name.to_string();
        self.description = def.description.to_string();
        self.icon = def.icon.to_string();
        self.category = def.category;
        if !self.unlocked {
            self.requirement = def.requirement;
        }
    }
}

/// Cumulative usage counters plus the per-achievement snapshot
///
/// Owned exclusively by the stats store and mutated only through the
/// manager's tracking operations. One achievement entry per catalog
/// definition, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_messages: u64,
    pub daily_logins: u64,
    pub consecutive_logins: u64,
    /// Calendar day of the last counted login (`YYYY-MM-DD`), empty before
    /// the first run
    pub last_login_date: String,
    pub total_tokens_generated: u64,
    pub total_conversations_shared: u64,
    pub achievements: Vec<AchievementState>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_messages: 0,
            daily_logins: 0,
            consecutive_logins: 0,
            last_login_date: String::new(),
            total_tokens_generated: 0,
            total_conversations_shared: 0,
            achievements: ACHIEVEMENTS.iter().map(AchievementState::fresh).collect(),
        }
    }
}
