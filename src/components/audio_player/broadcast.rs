//! Page-wide audio broadcast.
//!
//! Every mounted `AudioPlayer` subscribes here. A player about to start
//! publishes `Play`; every other subscriber answers by pausing itself, which
//! keeps at most one clip audible on the page.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastKind {
    Play,
    Pause,
}

impl BroadcastKind {
    /// DOM event name for this broadcast.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Play => "AudioPlayer:play",
            Self::Pause => "AudioPlayer:pause",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast {
    pub kind: BroadcastKind,
    pub sender: PlayerId,
}

type Listener = Rc<dyn Fn(Broadcast)>;

/// Publish/subscribe registry scoped to the page session.
#[derive(Clone, Default)]
pub struct AudioBroadcast {
    listeners: Rc<RefCell<Vec<(PlayerId, Listener)>>>,
}

thread_local! {
    static PAGE_BROADCAST: AudioBroadcast = AudioBroadcast::default();
}

impl AudioBroadcast {
    /// The registry shared by every player on the current page.
    pub fn page() -> Self {
        PAGE_BROADCAST.with(Clone::clone)
    }

    /// Register `listener` for `id`, replacing any previous registration.
    pub fn subscribe(&self, id: PlayerId, listener: impl Fn(Broadcast) + 'static) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.push((id, Rc::new(listener)));
    }

    pub fn unsubscribe(&self, id: PlayerId) {
        self.listeners
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver `broadcast` to every subscriber, including the sender.
    ///
    /// Listeners are snapshotted first so they may publish or unsubscribe
    /// while being notified.
    pub fn publish(&self, broadcast: Broadcast) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(broadcast);
        }
    }
}

impl PartialEq for AudioBroadcast {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl fmt::Debug for AudioBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBroadcast")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
