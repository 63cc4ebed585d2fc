//! Audio player widget: play/pause control, duration readout and page-wide
//! exclusivity through [`AudioBroadcast`].

use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::web_helpers::{media_paused, media_snapshot};
use crate::components::Icon;

mod broadcast;
mod controller;
mod types;

pub use broadcast::{AudioBroadcast, Broadcast, BroadcastKind, PlayerId};
pub use controller::{AudioPlayerController, ElementMedia, MediaControl};
pub use types::{format_duration, DurationLabels, MediaSnapshot, PlaybackState, ReadyState};

/// Re-read the media element and re-render the state derived from it.
fn refresh_from_media(
    element_id: String,
    labels: Option<DurationLabels>,
    mut playback: Signal<PlaybackState>,
    mut duration_text: Signal<Option<String>>,
) {
    spawn(async move {
        let snapshot = match media_snapshot(&element_id).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("media state unavailable for #{element_id}: {err}");
                return;
            }
        };
        if playback.peek().is_paused() != snapshot.paused {
            playback.write().sync(snapshot.paused);
        }
        if let Some(labels) = labels {
            duration_text.set(format_duration(&snapshot, &labels));
        }
    });
}

#[component]
pub fn AudioPlayer(
    title: String,
    src: String,
    minutes_abbreviation: String,
    hours_abbreviation: String,
    #[props(default = true)] show_duration: bool,
) -> Element {
    let broadcast = try_use_context::<AudioBroadcast>().unwrap_or_else(AudioBroadcast::page);
    let controller = use_hook(move || {
        let id = PlayerId::new();
        let media = ElementMedia::new(format!("audio-player-{id}"));
        Rc::new(AudioPlayerController::attach(id, broadcast, media))
    });
    {
        let controller = controller.clone();
        use_drop(move || {
            controller.detach();
            debug!("audio player {} detached", controller.id());
        });
    }

    let mut playback = use_signal(PlaybackState::default);
    let duration_text = use_signal(|| None::<String>);
    let element_id = controller.media().element_id().to_string();
    let labels = show_duration.then(|| {
        DurationLabels::new(hours_abbreviation.clone(), minutes_abbreviation.clone())
    });

    // Metadata may already be loaded (cache, autoplay) by the time we mount.
    {
        let element_id = element_id.clone();
        let labels = labels.clone();
        use_effect(move || {
            refresh_from_media(element_id.clone(), labels.clone(), playback, duration_text);
        });
    }

    let on_loaded_metadata = {
        let element_id = element_id.clone();
        let labels = labels.clone();
        move |_| refresh_from_media(element_id.clone(), labels.clone(), playback, duration_text)
    };

    let on_play_pause = {
        let controller = controller.clone();
        let element_id = element_id.clone();
        move |_| {
            let paused = playback.peek().resolve_paused(media_paused(&element_id));
            controller.play_pause(paused);
        }
    };

    let duration_label = duration_text().unwrap_or_default();

    rsx! {
        div {
            class: "AudioPlayer",
            "playing": playback().attribute(),
            "data-minutes-abbreviation": "{minutes_abbreviation}",
            "data-hours-abbreviation": "{hours_abbreviation}",
            audio {
                id: "{element_id}",
                src: "{src}",
                preload: "metadata",
                onplay: move |_| playback.write().sync(false),
                onpause: move |_| playback.write().sync(true),
                onloadedmetadata: on_loaded_metadata,
            }
            button {
                r#type: "button",
                class: "AudioPlayer-playPause",
                "data-click": "playPause",
                aria_label: "Play or pause {title}",
                onclick: on_play_pause,
                Icon {
                    name: "play".to_string(),
                    class: "Icon AudioPlayer-playIcon".to_string(),
                }
                Icon {
                    name: "pause".to_string(),
                    class: "Icon AudioPlayer-pauseIcon".to_string(),
                }
            }
            div { class: "AudioPlayer-info",
                span { class: "AudioPlayer-title", "{title}" }
                if show_duration {
                    span { class: "AudioPlayer-duration", "data-duration": "", "{duration_label}" }
                }
            }
        }
    }
}
