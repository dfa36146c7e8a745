use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Spinner shown while a lookup is in flight
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            class: "spinner-container",
            div { class: "spinner" }
            p { class: "spinner-message", "{props.message}" }
        }
    }
}
