use dioxus::prelude::*;

mod components;
mod config;
mod error;

use components::StyleguidePage;

const WIDGETS_CSS: Asset = asset!("/assets/styling/widgets.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Styleguide widgets" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { href: WIDGETS_CSS }

        StyleguidePage {}
    }
}
