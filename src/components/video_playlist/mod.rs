//! Video playlist widget: a strip of entries, one active player slot,
//! auto-advance on end and scroll-edge aware navigation buttons.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::web_helpers::{media_play, scroll_element_by, scroll_metrics};
use crate::components::Icon;
use crate::config::{PlaylistDocument, PlaylistEntry, VideoSource, WidgetSettings};

mod fragment;
mod playlist;
mod scroll;

pub use fragment::FragmentEndpoint;
pub use playlist::Playlist;
pub use scroll::{ScrollDirection, ScrollMetrics, ScrollOffset, ScrollState};

fn refresh_scroll_state(container_id: String, mut scroll_state: Signal<ScrollState>) {
    spawn(async move {
        match scroll_metrics(&container_id).await {
            Ok(metrics) => {
                let next = ScrollState::from_metrics(&metrics);
                if *scroll_state.peek() != next {
                    scroll_state.set(next);
                }
            }
            Err(err) => warn!("scroll state unavailable: {err}"),
        }
    });
}

fn scroll_playlist(container_id: String, direction: ScrollDirection, fraction: f64, smooth: bool) {
    spawn(async move {
        let metrics = match scroll_metrics(&container_id).await {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!("cannot scroll playlist: {err}");
                return;
            }
        };
        if let Err(err) = scroll_element_by(&container_id, metrics.step(direction, fraction), smooth)
        {
            warn!("cannot scroll playlist: {err}");
        }
    });
}

/// DOM id and source of the player in the active slot: the current entry's,
/// or the initial player before any entry has been loaded.
fn active_slot(
    document: &PlaylistDocument,
    current: Option<usize>,
    module_id: &str,
) -> Option<(String, VideoSource)> {
    match current {
        Some(index) => document
            .items
            .get(index)
            .map(|item| (format!("{module_id}-item-{index}"), item.video.clone())),
        None => document
            .initial
            .clone()
            .map(|video| (format!("{module_id}-initial"), video)),
    }
}

#[component]
pub fn VideoPlaylistModule(playlist: PlaylistDocument, settings: WidgetSettings) -> Element {
    let module_id = use_hook(|| format!("video-playlist-{}", uuid::Uuid::new_v4().simple()));
    let container_id = format!("{module_id}-items");
    let item_count = playlist.items.len();
    let mut state = use_signal(move || Playlist::new(item_count));
    let scroll_state = use_signal(ScrollState::default);
    let mut clipped = use_signal(|| playlist.clipped);
    let endpoint = FragmentEndpoint::new(playlist.fragment_uri.clone(), &playlist.fragment_params);
    let step = settings.scroll_step();
    let smooth = settings.smooth_scroll;

    {
        let container_id = container_id.clone();
        use_effect(move || refresh_scroll_state(container_id.clone(), scroll_state));
    }

    let current = state.read().current_index();
    let slot = active_slot(&playlist, current, &module_id);

    let on_scroll = {
        let container_id = container_id.clone();
        move |_| refresh_scroll_state(container_id.clone(), scroll_state)
    };

    let on_expand = {
        let container_id = container_id.clone();
        move |_| {
            clipped.set(false);
            refresh_scroll_state(container_id.clone(), scroll_state);
        }
    };

    let scroll_button = |direction: ScrollDirection| {
        let container_id = container_id.clone();
        move |_: MouseEvent| {
            if scroll_state.peek().allows(direction) {
                scroll_playlist(container_id.clone(), direction, step, smooth);
            }
        }
    };
    let on_scroll_backward = scroll_button(ScrollDirection::Backward);
    let on_scroll_forward = scroll_button(ScrollDirection::Forward);

    let scroll = scroll_state();

    rsx! {
        section {
            id: "{module_id}",
            class: "VideoPlaylistModule",
            "data-clipped": clipped().then_some(""),
            "overflowing": scroll.overflowing_attribute(),
            "fragment-uri": "{endpoint.uri()}",
            "fragment-params": "{playlist.fragment_params}",
            div { class: "VideoPlaylistModule-player",
                for (video_id , source) in slot.into_iter() {
                    PlaylistVideo {
                        key: "{video_id}",
                        video_id: video_id.clone(),
                        source: source,
                        on_ready: {
                            let video_id = video_id.clone();
                            move |_| {
                                let Some(index) = current else {
                                    return;
                                };
                                if !state.peek().autoplay_pending(index) {
                                    return;
                                }
                                if state.write().take_autoplay(index) {
                                    if let Err(err) = media_play(&video_id) {
                                        warn!("playlist autoplay failed: {err}");
                                    }
                                }
                            }
                        },
                        on_ended: move |_| {
                            if let Some(next) = state.write().advance_on_end() {
                                debug!("playlist advanced to item {next}");
                            }
                        },
                    }
                }
            }
            div { class: "VideoPlaylistModule-header",
                if !playlist.title.is_empty() {
                    h2 { class: "VideoPlaylistModule-title", "{playlist.title}" }
                }
                if !state.read().is_empty() {
                    div { class: "VideoPlaylistModule-scrollButtons",
                        button {
                            r#type: "button",
                            "data-scroll-backward": "",
                            aria_label: "Scroll playlist back",
                            disabled: scroll.disabled(ScrollDirection::Backward),
                            onclick: on_scroll_backward,
                            Icon { name: "chevron-left".to_string(), class: "Icon".to_string() }
                        }
                        button {
                            r#type: "button",
                            "data-scroll-forward": "",
                            aria_label: "Scroll playlist forward",
                            disabled: scroll.disabled(ScrollDirection::Forward),
                            onclick: on_scroll_forward,
                            Icon { name: "chevron-right".to_string(), class: "Icon".to_string() }
                        }
                    }
                }
            }
            div {
                id: "{container_id}",
                class: "VideoPlaylistModule-items",
                "data-playlist-items": "",
                onscroll: on_scroll,
                for (index , item) in playlist.items.iter().enumerate() {
                    PlaylistItemCard {
                        key: "{index}-{item.content_id}",
                        item: item.clone(),
                        href: endpoint.url_for(&item.content_id),
                        current: state.read().is_current(index),
                        on_select: move |_| {
                            if state.write().select(index).is_some() {
                                debug!("playlist item {index} selected");
                            }
                        },
                    }
                }
            }
            button {
                r#type: "button",
                class: "VideoPlaylistModule-expand",
                "data-click": "toggleExpand",
                onclick: on_expand,
                "Show all"
                Icon { name: "chevron-down".to_string(), class: "Icon".to_string() }
            }
        }
    }
}

#[component]
fn PlaylistVideo(
    video_id: String,
    source: VideoSource,
    on_ready: EventHandler<()>,
    on_ended: EventHandler<()>,
) -> Element {
    let poster = source.poster.clone().unwrap_or_default();

    rsx! {
        div { "data-video-player": "",
            video {
                id: "{video_id}",
                src: "{source.src}",
                poster: "{poster}",
                controls: true,
                playsinline: true,
                preload: "metadata",
                oncanplay: move |_| on_ready.call(()),
                onended: move |_| on_ended.call(()),
            }
        }
    }
}

#[component]
fn PlaylistItemCard(
    item: PlaylistEntry,
    href: String,
    current: bool,
    on_select: EventHandler<()>,
) -> Element {
    rsx! {
        a {
            class: "VideoPlaylistItem",
            href: "{href}",
            "is-current": current.then_some(""),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(());
            },
            if let Some(thumbnail) = item.thumbnail.as_ref() {
                img {
                    class: "VideoPlaylistItem-thumbnail",
                    src: "{thumbnail}",
                    alt: "",
                    "loading": "lazy",
                }
            }
            span { class: "VideoPlaylistItem-title", "{item.title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(src: &str) -> VideoSource {
        VideoSource {
            src: src.to_string(),
            poster: None,
        }
    }

    fn document(initial: Option<VideoSource>) -> PlaylistDocument {
        PlaylistDocument {
            title: "Featured".to_string(),
            fragment_uri: "/f".to_string(),
            fragment_params: String::new(),
            clipped: true,
            initial,
            items: ["one", "two", "three"]
                .into_iter()
                .map(|id| PlaylistEntry {
                    content_id: id.to_string(),
                    title: id.to_uppercase(),
                    thumbnail: None,
                    video: source(&format!("/video/{id}.mp4")),
                })
                .collect(),
        }
    }

    #[test]
    fn initial_player_fills_the_slot_until_an_item_loads() {
        let doc = document(Some(source("/video/intro.mp4")));
        let playlist = Playlist::new(doc.items.len());

        assert_eq!(
            active_slot(&doc, playlist.current_index(), "vp"),
            Some(("vp-initial".to_string(), source("/video/intro.mp4")))
        );
    }

    #[test]
    fn slot_follows_selection_and_auto_advance() {
        let doc = document(Some(source("/video/intro.mp4")));
        let mut playlist = Playlist::new(doc.items.len());

        playlist.select(1);
        assert_eq!(
            active_slot(&doc, playlist.current_index(), "vp"),
            Some(("vp-item-1".to_string(), source("/video/two.mp4")))
        );

        playlist.advance_on_end();
        assert_eq!(
            active_slot(&doc, playlist.current_index(), "vp"),
            Some(("vp-item-2".to_string(), source("/video/three.mp4")))
        );

        // Last entry ended: nothing further is loaded.
        assert_eq!(playlist.advance_on_end(), None);
        assert_eq!(
            active_slot(&doc, playlist.current_index(), "vp"),
            Some(("vp-item-2".to_string(), source("/video/three.mp4")))
        );
    }

    #[test]
    fn slot_is_empty_without_an_initial_player() {
        let doc = document(None);
        assert_eq!(active_slot(&doc, None, "vp"), None);
        assert_eq!(active_slot(&doc, Some(7), "vp"), None);
    }

    #[test]
    fn only_the_loaded_item_is_marked_current() {
        let doc = document(None);
        let mut playlist = Playlist::new(doc.items.len());
        playlist.select(2);
        playlist.select(0);

        let marked: Vec<usize> = (0..doc.items.len())
            .filter(|index| playlist.is_current(*index))
            .collect();
        assert_eq!(marked, vec![0]);
        assert_eq!(
            active_slot(&doc, playlist.current_index(), "vp").map(|(id, _)| id),
            Some("vp-item-0".to_string())
        );
    }
}
