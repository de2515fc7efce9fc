//! Achievement and usage statistics tracking for N.I.D.A.M
//!
//! Accumulates usage counters for a single user, derives achievement
//! progress from them, detects newly satisfied achievements, persists the
//! record across sessions (`~/.nidam/stats.db`), and notifies registered
//! listeners on unlocks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ tracking ops │   │    init()    │
//! └──────┬───────┘   └──────┬───────┘
//!        │            streak check
//!        ▼                  ▼
//!   StatsStore ◀─── checker (catalog rules)
//!        │                  │
//!        ▼                  ▼
//!  ~/.nidam/stats.db  UnlockNotifier ──▶ listeners
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut achievements = AchievementManager::new();
//! achievements.on_unlock(|a| println!("{} {}", a.icon, a.name));
//! achievements.init();
//!
//! achievements.track_message();
//! achievements.track_tokens_generated(250);
//! ```

mod checker;
mod db;
mod definitions;
mod manager;
mod models;
mod notifier;
mod store;
mod streaks;

pub use db::StatsDb;
pub use definitions::{ACHIEVEMENTS, AchievementCategory, AchievementDef, AchievementId};
pub use manager::AchievementManager;
pub use models::{AchievementState, LockState, UserStats};
pub use notifier::{UnlockListener, UnlockNotifier};
pub use store::{STORAGE_KEY, StatsStore};
pub use streaks::{is_consecutive_day, today_string};
