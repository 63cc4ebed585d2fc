use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::web_helpers::replace_location;
use crate::config::SectionLink;

/// URL to navigate to for a selected option value; placeholders (blank
/// values) stay on the page.
pub fn navigation_target(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Dropdown that replaces the page location with the chosen section.
#[component]
pub fn SectionNavigation(
    label: String,
    sections: Vec<SectionLink>,
    #[props(default)] current: Option<String>,
) -> Element {
    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        let Some(target) = navigation_target(&value) else {
            return;
        };
        if let Err(err) = replace_location(target) {
            warn!("section navigation to {target} failed: {err}");
        }
    };

    rsx! {
        nav { class: "SectionNavigation",
            label { class: "SectionNavigation-label",
                span { "{label}" }
                select { class: "SectionNavigation-select", onchange: on_change,
                    if current.is_none() {
                        option { value: "", selected: true, disabled: true, "{label}" }
                    }
                    for link in sections.iter() {
                        option {
                            key: "{link.url}",
                            value: "{link.url}",
                            selected: current.as_deref() == Some(link.url.as_str()),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
