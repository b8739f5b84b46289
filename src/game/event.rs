//! Game events
//!
//! The simulation never prints. Anything worth telling the outside world
//! (polarity switches, level loads, the final score) is queued here during
//! a tick, and the main loop drains the queues and writes them to stdout.

use super::player::Polarity;

/// Pending events of one kind, oldest first
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One queue per kind of diagnostic
#[derive(Debug, Default)]
pub struct Events {
    /// Player switched polarity
    pub polarity_changed: EventQueue<PolarityChangedEvent>,

    /// A level was (re)loaded
    pub level_loaded: EventQueue<LevelLoadedEvent>,

    /// Last level cleared
    pub game_won: EventQueue<GameWonEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every queue into printable lines, in the order they matter:
    /// switches, then loads, then the win.
    pub fn drain_messages(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.extend(self.polarity_changed.drain().map(|e| e.to_string()));
        lines.extend(self.level_loaded.drain().map(|e| e.to_string()));
        lines.extend(self.game_won.drain().map(|e| e.to_string()));
        lines
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarityChangedEvent {
    pub polarity: Polarity,
}

impl std::fmt::Display for PolarityChangedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Polarity changed to {} ({})",
            self.polarity.name(),
            self.polarity.color_name()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLoadedEvent {
    /// Zero-based level index
    pub level: usize,
}

impl std::fmt::Display for LevelLoadedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loaded level {}", self.level + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameWonEvent {
    pub score: u32,
}

impl std::fmt::Display for GameWonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You won the game with a score of: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_drains_in_order() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_messages() {
        let mut events = Events::new();
        events.game_won.send(GameWonEvent { score: 30 });
        events.level_loaded.send(LevelLoadedEvent { level: 0 });
        events.polarity_changed.send(PolarityChangedEvent { polarity: Polarity::Negative });

        assert_eq!(
            events.drain_messages(),
            vec![
                "Polarity changed to negative (BLUE)".to_string(),
                "Loaded level 1".to_string(),
                "You won the game with a score of: 30".to_string(),
            ]
        );
        assert!(events.drain_messages().is_empty());
    }
}
