use dioxus::prelude::*;

use crate::features::case_lookup::BackendStatus;

#[derive(Props, PartialEq, Clone)]
pub struct BackendStatusBannerProps {
    pub status: BackendStatus,
    pub backend_url: String,
}

/// Warns when the startup probe could not reach the backend. Renders nothing otherwise.
#[component]
pub fn BackendStatusBanner(props: BackendStatusBannerProps) -> Element {
    match props.status {
        BackendStatus::Offline => rsx! {
            div {
                class: "backend-banner offline",
                "⚠️ Could not reach the case lookup backend at {props.backend_url}. Searches will fail until it is running."
            }
        },
        BackendStatus::Online(_) | BackendStatus::Unknown => rsx! {},
    }
}
