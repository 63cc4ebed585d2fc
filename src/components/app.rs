use crate::components::{AudioBroadcast, AudioPlayer, SectionNavigation, VideoPlaylistModule};
use crate::config::PageDocument;
use dioxus::prelude::*;

/// Demo page rendering every widget from the page document.
#[component]
pub fn StyleguidePage() -> Element {
    let page = use_hook(PageDocument::load);
    use_context_provider(AudioBroadcast::page);

    let settings = page.settings.clone();

    rsx! {
        main { class: "Styleguide",
            header { class: "Styleguide-header",
                h1 { "Styleguide widgets" }
                if !page.sections.is_empty() {
                    SectionNavigation {
                        label: page.navigation_label.clone(),
                        sections: page.sections.clone(),
                        current: page.current_section.clone(),
                    }
                }
            }

            section { id: "audio", class: "Styleguide-section",
                h2 { "Audio" }
                for (index , entry) in page.audio.iter().enumerate() {
                    AudioPlayer {
                        key: "{index}-{entry.src}",
                        title: entry.title.clone(),
                        src: entry.src.clone(),
                        minutes_abbreviation: entry
                            .minutes_abbreviation
                            .clone()
                            .unwrap_or_else(|| settings.minutes_abbreviation.clone()),
                        hours_abbreviation: entry
                            .hours_abbreviation
                            .clone()
                            .unwrap_or_else(|| settings.hours_abbreviation.clone()),
                        show_duration: entry.show_duration,
                    }
                }
            }

            if let Some(playlist) = page.playlist.clone() {
                section { id: "video", class: "Styleguide-section",
                    VideoPlaylistModule { playlist: playlist, settings: settings.clone() }
                }
            }
        }
    }
}
