// DOM access used by the widgets. wasm talks to web-sys directly; desktop and
// mobile webviews go through `document::eval`.
#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;

use crate::components::audio_player::MediaSnapshot;
use crate::components::video_playlist::{ScrollMetrics, ScrollOffset};
use crate::error::{Result, WidgetError};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::spawn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    window, CustomEvent, CustomEventInit, Element, HtmlMediaElement, ScrollBehavior,
    ScrollToOptions,
};

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Result<Element> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::Dom("no document".to_string()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn media_element(id: &str) -> Result<HtmlMediaElement> {
    element_by_id(id)?
        .dyn_into::<HtmlMediaElement>()
        .map_err(|_| WidgetError::UnexpectedElement {
            id: id.to_string(),
            expected: "a media element",
        })
}

#[cfg(target_arch = "wasm32")]
pub fn media_play(id: &str) -> Result<()> {
    let promise = media_element(id)?.play()?;
    let id = id.to_string();
    spawn(async move {
        // Autoplay policies reject the promise; the element just stays paused.
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            debug!("play() on #{id} rejected: {:?}", WidgetError::from(err));
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn media_pause(id: &str) -> Result<()> {
    media_element(id)?.pause()?;
    Ok(())
}

/// Live `paused` flag of the element; `None` when it cannot be read
/// synchronously.
#[cfg(target_arch = "wasm32")]
pub fn media_paused(id: &str) -> Option<bool> {
    media_element(id).ok().map(|media| media.paused())
}

#[cfg(target_arch = "wasm32")]
pub async fn media_snapshot(id: &str) -> Result<MediaSnapshot> {
    let media = media_element(id)?;
    let duration = media.duration();
    Ok(MediaSnapshot {
        paused: media.paused(),
        ready_state: media.ready_state(),
        duration: duration.is_finite().then_some(duration),
    })
}

#[cfg(target_arch = "wasm32")]
pub async fn scroll_metrics(id: &str) -> Result<ScrollMetrics> {
    let element = element_by_id(id)?;
    Ok(ScrollMetrics {
        scroll_left: element.scroll_left() as f64,
        scroll_top: element.scroll_top() as f64,
        scroll_width: element.scroll_width() as f64,
        scroll_height: element.scroll_height() as f64,
        client_width: element.client_width() as f64,
        client_height: element.client_height() as f64,
    })
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_element_by(id: &str, offset: ScrollOffset, smooth: bool) -> Result<()> {
    let element = element_by_id(id)?;
    let options = ScrollToOptions::new();
    options.set_left(offset.left);
    options.set_top(offset.top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_by_with_scroll_to_options(&options);
    Ok(())
}

/// Fire a bubbling `CustomEvent` named `name` from the element.
#[cfg(target_arch = "wasm32")]
pub fn dispatch_page_event(id: &str, name: &str) -> Result<()> {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    element_by_id(id)?.dispatch_event(&event)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn replace_location(url: &str) -> Result<()> {
    let window = window().ok_or_else(|| WidgetError::Dom("no window".to_string()))?;
    window.location().replace(url)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn media_play(id: &str) -> Result<()> {
    let id = js_string(id);
    let script = format!(
        r#"(function () {{
            const media = document.getElementById({id});
            if (!media) return false;
            const pending = media.play();
            if (pending && typeof pending.catch === "function") pending.catch(() => {{}});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn media_pause(id: &str) -> Result<()> {
    let id = js_string(id);
    let script = format!(
        r#"(function () {{
            const media = document.getElementById({id});
            if (media) media.pause();
        }})();"#
    );
    let _ = document::eval(&script);
    Ok(())
}

// Webview reads are async only; callers fall back to their mirrored state.
#[cfg(not(target_arch = "wasm32"))]
pub fn media_paused(_id: &str) -> Option<bool> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn media_snapshot(id: &str) -> Result<MediaSnapshot> {
    let element = js_string(id);
    let script = format!(
        r#"return (function () {{
            const media = document.getElementById({element});
            if (!media) return null;
            return {{
              paused: !!media.paused,
              ready_state: media.readyState | 0,
              duration: Number.isFinite(media.duration) ? media.duration : null,
            }};
        }})();"#
    );
    document::eval(&script)
        .join::<Option<MediaSnapshot>>()
        .await
        .map_err(|err| WidgetError::Eval(err.to_string()))?
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn scroll_metrics(id: &str) -> Result<ScrollMetrics> {
    let element = js_string(id);
    let script = format!(
        r#"return (function () {{
            const el = document.getElementById({element});
            if (!el) return null;
            return {{
              scroll_left: el.scrollLeft,
              scroll_top: el.scrollTop,
              scroll_width: el.scrollWidth,
              scroll_height: el.scrollHeight,
              client_width: el.clientWidth,
              client_height: el.clientHeight,
            }};
        }})();"#
    );
    document::eval(&script)
        .join::<Option<ScrollMetrics>>()
        .await
        .map_err(|err| WidgetError::Eval(err.to_string()))?
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_element_by(id: &str, offset: ScrollOffset, smooth: bool) -> Result<()> {
    let id = js_string(id);
    let behavior = if smooth { "smooth" } else { "auto" };
    let script = format!(
        r#"(function () {{
            const el = document.getElementById({id});
            if (!el) return;
            el.scrollBy({{ left: {left}, top: {top}, behavior: "{behavior}" }});
        }})();"#,
        left = offset.left,
        top = offset.top,
    );
    let _ = document::eval(&script);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch_page_event(id: &str, name: &str) -> Result<()> {
    let id = js_string(id);
    let name = js_string(name);
    let script = format!(
        r#"(function () {{
            const el = document.getElementById({id});
            if (el) el.dispatchEvent(new CustomEvent({name}, {{ bubbles: true }}));
        }})();"#
    );
    let _ = document::eval(&script);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_location(url: &str) -> Result<()> {
    let url = js_string(url);
    let _ = document::eval(&format!("window.location.replace({url});"));
    Ok(())
}
