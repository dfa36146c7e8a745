use dioxus::prelude::*;
use ui::CaseLookupService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Court Case Data Fetcher" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        CaseLookupService {}
    }
}
