//! Unlock event notification
//!
//! Dispatches newly unlocked achievements to registered listeners,
//! fire-and-forget: no acknowledgment, no queuing, no retry.

use tracing::info;

use crate::models::AchievementState;

/// Callback invoked with the full state of a newly unlocked achievement
pub type UnlockListener = Box<dyn FnMut(&AchievementState) + Send>;

/// Listener registry for achievement unlock events
///
/// Firing at most once per achievement is guaranteed by the one-way lock
/// latch upstream, not by this registry.
#[derive(Default)]
pub struct UnlockNotifier {
    listeners: Vec<UnlockListener>,
}

impl UnlockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for future unlock events
    pub fn subscribe(&mut self, listener: impl FnMut(&AchievementState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Broadcast an unlock to every registered listener
    pub fn notify(&mut self, achievement: &AchievementState) {
        info!(
            id = achievement.id.as_str(),
            "Achievement unlocked: {}", achievement.name
        );
        for listener in &mut self.listeners {
            listener(achievement);
        }
    }

    /// Drop all registered listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
