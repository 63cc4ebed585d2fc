/// Current-item state of a video playlist.
///
/// Each entry carries its own `is-current` flag, mirroring the rendered
/// attribute. Loading an entry rewrites every flag, so at most one is ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    current_flags: Vec<bool>,
    /// Set by the first load; the server-rendered player never autoplays.
    autoplay_armed: bool,
    pending_autoplay: Option<usize>,
}

impl Playlist {
    pub fn new(len: usize) -> Self {
        Self {
            current_flags: vec![false; len],
            autoplay_armed: false,
            pending_autoplay: None,
        }
    }

    pub fn len(&self) -> usize {
        self.current_flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_flags.is_empty()
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_flags.get(index).copied().unwrap_or(false)
    }

    /// Linear scan for the flagged entry.
    pub fn current_index(&self) -> Option<usize> {
        self.current_flags.iter().position(|flag| *flag)
    }

    /// Handle a click on entry `index`. Returns the loaded index, or `None`
    /// when the entry is already current or out of range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len() || self.is_current(index) {
            return None;
        }
        self.load(index);
        Some(index)
    }

    /// Handle the active video ending: load the following entry if any.
    /// The last entry stops the playlist; there is no wraparound.
    pub fn advance_on_end(&mut self) -> Option<usize> {
        let current = self.current_index()?;
        let next = current + 1;
        if next >= self.len() {
            return None;
        }
        self.load(next);
        Some(next)
    }

    /// Whether the player for `index` should start once it is ready.
    pub fn autoplay_pending(&self, index: usize) -> bool {
        self.autoplay_armed && self.pending_autoplay == Some(index)
    }

    /// Consume the pending autoplay for the player that just became ready.
    pub fn take_autoplay(&mut self, index: usize) -> bool {
        if !self.autoplay_pending(index) {
            return false;
        }
        self.pending_autoplay = None;
        true
    }

    fn load(&mut self, index: usize) {
        self.autoplay_armed = true;
        self.pending_autoplay = Some(index);
        for (position, flag) in self.current_flags.iter_mut().enumerate() {
            *flag = position == index;
        }
    }
}
