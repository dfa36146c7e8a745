use dioxus::prelude::*;

use crate::components::display::{BackendStatusBanner, RequestStatePanel};
use crate::components::forms::CaseLookupForm;
use crate::features::case_lookup::{
    lookup_case_with_config, probe_backend_with_config, LookupAction, LookupState,
};
use crate::services::client::CaseQuery;
use crate::services::config::LookupConfig;
use crate::{console_error, console_info};

const CASE_LOOKUP_CSS: Asset = asset!("/assets/styling/case_lookup.css");

#[component]
pub fn CaseLookupService() -> Element {
    let config = use_hook(LookupConfig::default);
    let mut state = use_signal(LookupState::default);

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: LookupAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    // Probe the backend once on startup
    let probe_config = config.clone();
    use_effect(move || {
        let probe_config = probe_config.clone();
        spawn(async move {
            let status = probe_backend_with_config(probe_config).await;
            console_info!("[Case Lookup] Backend status: {:?}", status);
            dispatch.call(LookupAction::SetBackendStatus(status));
        });
    });

    let submit_config = config.clone();
    let on_submit = move |query: CaseQuery| {
        let request = state.with_mut(|s| s.begin_request());
        console_info!(
            "[Case Lookup] Request {} for {} {}/{}",
            request.0,
            query.case_type,
            query.case_number,
            query.case_year
        );

        let config = submit_config.clone();
        // An earlier lookup keeps running; its result is dropped on settle.
        // Tasks belong to this scope and are cancelled when it unmounts.
        spawn(async move {
            let action = lookup_case_with_config(config, request, query).await;
            if let LookupAction::Settle { outcome: Err(error), .. } = &action {
                console_error!("[Case Lookup] Request {} failed: {}", request.0, error);
            }
            dispatch.call(action);
        });
    };

    let backend_url = config.root_url();

    rsx! {
        document::Link { rel: "stylesheet", href: CASE_LOOKUP_CSS }

        div {
            class: "app-container",

            header {
                class: "app-header",
                div {
                    class: "header-content",
                    h1 { "Court Case Data Fetcher" }
                    p { "Delhi High Court" }
                }
            }

            main {
                class: "app-main",

                BackendStatusBanner {
                    status: state().backend,
                    backend_url: backend_url
                }

                CaseLookupForm {
                    state: state,
                    dispatch: dispatch,
                    on_submit: on_submit
                }

                div {
                    class: "results-container",
                    RequestStatePanel { request: state().request }
                }
            }
        }
    }
}
