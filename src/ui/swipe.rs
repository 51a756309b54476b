//! Swipe-to-delete gesture for list cards.
//!
//! Dragging left moves the card up to [`DELETE_THRESHOLD_PX`]; releasing at
//! the threshold commits the delete once the fade-out is over, anything else
//! snaps the card back. The gesture never touches a store itself: a committed
//! swipe hands back the record id for the caller to remove.

use std::time::Duration;

pub const DELETE_THRESHOLD_PX: f32 = 100.0;
pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    Resting,
    Dragging { offset: f32 },
    Committing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    /// Card returns to rest.
    SnapBack,
    /// Remove `id` once `after` has elapsed.
    Delete { id: String, after: Duration },
    /// Input arrived while a delete was already under way.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SwipeGesture {
    id: String,
    state: SwipeState,
}

impl SwipeGesture {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: SwipeState::Resting,
        }
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Horizontal translation of the card, in px to the left.
    pub fn offset(&self) -> f32 {
        match self.state {
            SwipeState::Resting => 0.0,
            SwipeState::Dragging { offset } => offset,
            SwipeState::Committing => DELETE_THRESHOLD_PX,
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.state == SwipeState::Committing {
            0.0
        } else {
            1.0
        }
    }

    /// Pointer moved while pressed. Only leftward drags move the card.
    pub fn on_swiping(&mut self, dir: SwipeDirection, delta_x: f32) {
        if self.state == SwipeState::Committing || dir != SwipeDirection::Left {
            return;
        }
        self.state = SwipeState::Dragging {
            offset: delta_x.abs().min(DELETE_THRESHOLD_PX),
        };
    }

    /// Pointer released.
    pub fn on_swiped(&mut self, dir: SwipeDirection, delta_x: f32) -> SwipeOutcome {
        if self.state == SwipeState::Committing {
            return SwipeOutcome::Ignored;
        }

        if dir == SwipeDirection::Left && delta_x.abs() >= DELETE_THRESHOLD_PX {
            self.state = SwipeState::Committing;
            return SwipeOutcome::Delete {
                id: self.id.clone(),
                after: FADE_OUT,
            };
        }

        self.state = SwipeState::Resting;
        SwipeOutcome::SnapBack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::NewShift;
    use crate::store::{MemoryStorage, ShiftStore};
    use chrono::NaiveDate;

    #[test]
    fn drag_is_capped_at_threshold() {
        let mut g = SwipeGesture::new("s1");
        g.on_swiping(SwipeDirection::Left, -40.0);
        assert_eq!(g.state(), SwipeState::Dragging { offset: 40.0 });
        g.on_swiping(SwipeDirection::Left, -250.0);
        assert_eq!(g.offset(), 100.0);
    }

    #[test]
    fn short_or_rightward_release_snaps_back() {
        let mut g = SwipeGesture::new("s1");
        g.on_swiping(SwipeDirection::Left, -60.0);
        assert_eq!(g.on_swiped(SwipeDirection::Left, -60.0), SwipeOutcome::SnapBack);
        assert_eq!(g.state(), SwipeState::Resting);

        g.on_swiping(SwipeDirection::Right, 150.0);
        assert_eq!(g.offset(), 0.0);
        assert_eq!(g.on_swiped(SwipeDirection::Right, 150.0), SwipeOutcome::SnapBack);
    }

    #[test]
    fn full_swipe_commits_once() {
        let mut g = SwipeGesture::new("s1");
        g.on_swiping(SwipeDirection::Left, -120.0);
        let out = g.on_swiped(SwipeDirection::Left, -120.0);
        assert_eq!(
            out,
            SwipeOutcome::Delete {
                id: "s1".into(),
                after: FADE_OUT
            }
        );
        assert_eq!(g.opacity(), 0.0);

        // further input is ignored while fading out
        g.on_swiping(SwipeDirection::Left, -10.0);
        assert_eq!(g.state(), SwipeState::Committing);
        assert_eq!(g.on_swiped(SwipeDirection::Left, -200.0), SwipeOutcome::Ignored);
    }

    #[test]
    fn committed_swipe_removes_from_store() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        let s = store
            .add(NewShift {
                title: "UTI".into(),
                location_id: "l".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                start_time: "07:00".into(),
                end_time: "19:00".into(),
                amount: 100.0,
                paid: false,
                notes: None,
            })
            .unwrap();

        let mut g = SwipeGesture::new(s.id.clone());
        g.on_swiping(SwipeDirection::Left, -100.0);
        if let SwipeOutcome::Delete { id, .. } = g.on_swiped(SwipeDirection::Left, -100.0) {
            assert!(store.remove(&id).unwrap());
        } else {
            panic!("expected a committed delete");
        }
        assert!(store.is_empty());
    }
}
