use crate::track::Track;

/// Decides the fate of tracks that got no detection in the current frame.
///
/// `retain` is asked once per unmatched track, after its `missed` counter
/// has been bumped for this frame.
pub trait PrunePolicy {
    fn retain(&self, track: &Track) -> bool;
}

/// Drops every track the moment it misses a frame. A re-appearing object
/// always gets a fresh id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropUnmatched;

impl PrunePolicy for DropUnmatched {
    #[inline]
    fn retain(&self, _track: &Track) -> bool {
        false
    }
}

/// Keeps an unmatched track for up to `max_missed` consecutive frames.
/// `KeepMissing { max_missed: 0 }` behaves like [`DropUnmatched`].
#[derive(Debug, Clone, Copy)]
pub struct KeepMissing {
    pub max_missed: u32,
}

impl PrunePolicy for KeepMissing {
    #[inline]
    fn retain(&self, track: &Track) -> bool {
        track.missed <= self.max_missed
    }
}
