//! The components module contains the page widgets and the styleguide shell.

mod app;
mod audio_player;
mod icons;
mod section_navigation;
mod video_playlist;
mod web_helpers;

pub use app::*;
pub use audio_player::*;
pub use icons::*;
pub use section_navigation::*;
pub use video_playlist::*;
