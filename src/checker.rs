//! Achievement checking logic
//!
//! Maps the current counters to per-achievement progress and applies the
//! one-way unlock transition over the catalog.

use chrono::{DateTime, Local, Timelike};

use crate::definitions::AchievementId;
use crate::models::{AchievementState, LockState, UserStats};

/// Measure progress for one achievement against the current counters.
///
/// Every id has exactly one rule; adding a catalog entry without a rule
/// here does not compile.
fn progress_for(id: AchievementId, stats: &UserStats, now: &DateTime<Local>) -> u64 {
    match id {
        AchievementId::DailyVisitor => stats.consecutive_logins,
        AchievementId::Wordsmith => stats.total_tokens_generated,
        AchievementId::SocialButterfly => stats.total_conversations_shared,
        AchievementId::PowerUser => stats.total_messages,
        // Midnight up to (not including) 5 AM
        AchievementId::NightOwl => {
            if now.hour() < 5 {
                1
            } else {
                0
            }
        }
    }
}

/// Re-evaluate every achievement against the current counters.
///
/// Unlocked achievements pass through untouched; the unlock transition
/// happens at most once per id and stamps `unlockedAt` from `now`. Returns
/// the newly unlocked states so the caller can notify listeners and decide
/// whether to persist.
pub fn run_checks(stats: &mut UserStats, now: DateTime<Local>) -> Vec<AchievementState> {
    let now_ms = now.timestamp_millis();

    // Progress rules read the counters, so measure everything first
    let measured: Vec<(usize, u64)> = stats
        .achievements
        .iter()
        .enumerate()
        .filter(|(_, a)| a.lock_state() == LockState::Locked)
        .map(|(i, a)| (i, progress_for(a.id, stats, &now)))
        .collect();

    let mut newly_unlocked = Vec::new();
    for (i, progress) in measured {
        let achievement = &mut stats.achievements[i];
        achievement.set_progress(progress);
        if progress >= achievement.requirement && achievement.unlock(now_ms) {
            newly_unlocked.push(achievement.clone());
        }
    }

    newly_unlocked
}
