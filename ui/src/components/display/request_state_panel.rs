use dioxus::prelude::*;

use crate::components::display::{CaseResultCard, ErrorBox, LoadingIndicator};
use crate::features::case_lookup::RequestState;

#[derive(Props, PartialEq, Clone)]
pub struct RequestStatePanelProps {
    pub request: RequestState,
}

/// Spinner, error box or result card for the current request. Idle renders nothing.
#[component]
pub fn RequestStatePanel(props: RequestStatePanelProps) -> Element {
    let request = props.request;

    if request.is_loading() {
        rsx! {
            LoadingIndicator { message: "Searching...".to_string() }
        }
    } else if let Some(message) = request.error_message() {
        rsx! {
            ErrorBox { message: message.to_string() }
        }
    } else if let Some(result) = request.result() {
        rsx! {
            CaseResultCard { result: result.clone() }
        }
    } else {
        rsx! {}
    }
}
