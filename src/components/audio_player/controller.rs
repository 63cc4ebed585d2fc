use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};

use super::broadcast::{AudioBroadcast, Broadcast, BroadcastKind, PlayerId};
use crate::components::web_helpers::{dispatch_page_event, media_pause, media_play};

/// Transport of a single media element.
pub trait MediaControl {
    fn play(&self);
    fn pause(&self);
    /// Tell the rest of the page, e.g. `AudioPlayer:play`.
    fn emit(&self, event_name: &'static str);
}

/// Media element looked up by DOM id at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMedia {
    element_id: String,
}

impl ElementMedia {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

impl MediaControl for ElementMedia {
    fn play(&self) {
        if let Err(err) = media_play(&self.element_id) {
            warn!("audio play failed: {err}");
        }
    }

    fn pause(&self) {
        if let Err(err) = media_pause(&self.element_id) {
            warn!("audio pause failed: {err}");
        }
    }

    fn emit(&self, event_name: &'static str) {
        if let Err(err) = dispatch_page_event(&self.element_id, event_name) {
            warn!("{event_name} not dispatched: {err}");
        }
    }
}

/// Play/pause logic of one `AudioPlayer`, bound to the page broadcast.
pub struct AudioPlayerController<M: MediaControl> {
    id: PlayerId,
    broadcast: AudioBroadcast,
    media: Rc<M>,
}

impl<M: MediaControl + 'static> AudioPlayerController<M> {
    /// Subscribe to the broadcast; a foreign `Play` pauses this player.
    pub fn attach(id: PlayerId, broadcast: AudioBroadcast, media: M) -> Self {
        let media = Rc::new(media);
        {
            let bus = broadcast.clone();
            let media = media.clone();
            broadcast.subscribe(id, move |event| {
                if event.kind == BroadcastKind::Play && event.sender != id {
                    pause_path(id, &bus, media.as_ref());
                }
            });
        }

        Self {
            id,
            broadcast,
            media,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn play_pause(&self, paused: bool) {
        if paused {
            self.play();
        } else {
            self.pause();
        }
    }

    pub fn play(&self) {
        announce(&self.broadcast, self.media.as_ref(), BroadcastKind::Play, self.id);
        self.media.play();
    }

    pub fn pause(&self) {
        pause_path(self.id, &self.broadcast, self.media.as_ref());
    }

    pub fn detach(&self) {
        self.broadcast.unsubscribe(self.id);
    }
}

fn pause_path<M: MediaControl + ?Sized>(id: PlayerId, broadcast: &AudioBroadcast, media: &M) {
    announce(broadcast, media, BroadcastKind::Pause, id);
    media.pause();
}

fn announce<M: MediaControl + ?Sized>(
    broadcast: &AudioBroadcast,
    media: &M,
    kind: BroadcastKind,
    sender: PlayerId,
) {
    debug!("{} from {sender}", kind.event_name());
    media.emit(kind.event_name());
    broadcast.publish(Broadcast { kind, sender });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Clone)]
    struct FakeMedia {
        paused: Rc<Cell<bool>>,
        emitted: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakeMedia {
        fn new() -> Self {
            Self {
                paused: Rc::new(Cell::new(true)),
                emitted: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn emitted(&self) -> Vec<&'static str> {
            self.emitted.borrow().clone()
        }

        fn is_playing(&self) -> bool {
            !self.paused.get()
        }
    }

    impl MediaControl for FakeMedia {
        fn play(&self) {
            self.paused.set(false);
        }

        fn pause(&self) {
            self.paused.set(true);
        }

        fn emit(&self, event_name: &'static str) {
            self.emitted.borrow_mut().push(event_name);
        }
    }

    fn player(broadcast: &AudioBroadcast) -> AudioPlayerController<FakeMedia> {
        AudioPlayerController::attach(PlayerId::new(), broadcast.clone(), FakeMedia::new())
    }

    #[test]
    fn play_pause_toggles_on_paused_flag() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);

        a.play_pause(true);
        assert!(a.media().is_playing());
        a.play_pause(false);
        assert!(!a.media().is_playing());
    }

    #[test]
    fn starting_one_player_pauses_the_other() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);
        let b = player(&broadcast);

        a.play();
        assert!(a.media().is_playing());

        b.play();
        assert!(!a.media().is_playing());
        assert!(b.media().is_playing());

        a.play();
        assert!(a.media().is_playing());
        assert!(!b.media().is_playing());
    }

    #[test]
    fn own_play_broadcast_is_ignored() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);
        a.play();
        assert!(a.media().is_playing());
    }

    #[test]
    fn detached_player_no_longer_reacts() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);
        let b = player(&broadcast);

        a.play();
        a.detach();
        b.play();
        assert!(a.media().is_playing());
        assert_eq!(broadcast.subscriber_count(), 1);
    }

    #[test]
    fn paused_player_announces_its_pause() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);
        let b = player(&broadcast);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            broadcast.subscribe(PlayerId::new(), move |event| seen.borrow_mut().push(event));
        }

        b.play();
        let events = seen.borrow();
        assert_eq!(events.len(), 2);
        assert!(events.contains(&Broadcast {
            kind: BroadcastKind::Play,
            sender: b.id(),
        }));
        assert!(events.contains(&Broadcast {
            kind: BroadcastKind::Pause,
            sender: a.id(),
        }));
    }

    #[test]
    fn page_events_are_emitted_from_the_player() {
        let broadcast = AudioBroadcast::default();
        let a = player(&broadcast);
        let b = player(&broadcast);

        a.play();
        assert_eq!(a.media().emitted(), vec!["AudioPlayer:play"]);

        b.play();
        assert_eq!(a.media().emitted(), vec!["AudioPlayer:play", "AudioPlayer:pause"]);
        assert_eq!(b.media().emitted(), vec!["AudioPlayer:play"]);

        b.pause();
        assert_eq!(b.media().emitted(), vec!["AudioPlayer:play", "AudioPlayer:pause"]);
    }
}
