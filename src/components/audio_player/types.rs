use serde::{Deserialize, Serialize};

/// HTML media `readyState` ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

impl From<u16> for ReadyState {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }
}

/// Point-in-time read of a media element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaSnapshot {
    pub paused: bool,
    pub ready_state: u16,
    /// `None` while the duration is NaN or infinite (unloaded media, live streams).
    #[serde(default)]
    pub duration: Option<f64>,
}

impl MediaSnapshot {
    pub fn ready_state(&self) -> ReadyState {
        ReadyState::from(self.ready_state)
    }
}

/// Whether the player is audible, mirrored onto the `playing` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub playing: bool,
}

impl PlaybackState {
    /// Sync from a native `play`/`pause` event.
    pub fn sync(&mut self, paused: bool) {
        self.playing = !paused;
    }

    pub fn is_paused(&self) -> bool {
        !self.playing
    }

    /// Prefer the element's live flag; the mirrored state can lag a native
    /// `play`/`pause` event that has not been delivered yet.
    pub fn resolve_paused(&self, live: Option<bool>) -> bool {
        live.unwrap_or_else(|| self.is_paused())
    }

    /// Presence-only attribute value: `Some("")` renders `playing=""`.
    pub fn attribute(&self) -> Option<&'static str> {
        self.playing.then_some("")
    }
}

/// Localized unit suffixes supplied through `data-*-abbreviation` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationLabels {
    pub hours: String,
    pub minutes: String,
}

impl DurationLabels {
    pub fn new(hours: impl Into<String>, minutes: impl Into<String>) -> Self {
        Self {
            hours: hours.into(),
            minutes: minutes.into(),
        }
    }
}

/// Render a media duration as `"<h> <hours>,<m> <minutes>"`, skipping zero units.
///
/// Seconds are dropped, so anything under a minute renders as an empty string.
/// Returns `None` until metadata is available.
pub fn format_duration(snapshot: &MediaSnapshot, labels: &DurationLabels) -> Option<String> {
    if snapshot.ready_state() < ReadyState::HaveMetadata {
        return None;
    }
    let seconds = snapshot.duration.filter(|d| d.is_finite() && *d >= 0.0)?;

    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds - hours * 3600.0) / 60.0).floor();

    let mut parts = Vec::with_capacity(2);
    if hours > 0.0 {
        parts.push(format!("{hours} {}", labels.hours));
    }
    if minutes > 0.0 {
        parts.push(format!("{minutes} {}", labels.minutes));
    }

    Some(parts.join(","))
}
