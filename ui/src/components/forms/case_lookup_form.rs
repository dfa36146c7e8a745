use dioxus::prelude::*;

use crate::components::input::CaseFieldInput;
use crate::features::case_lookup::{
    get_query_validation_message, validate_query_complete, LookupAction, LookupState,
};
use crate::services::client::{CaseField, CaseQuery};
use crate::{console_debug, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct CaseLookupFormProps {
    pub state: Signal<LookupState>,
    pub dispatch: EventHandler<LookupAction>,
    /// Called with a complete query when the form is submitted
    pub on_submit: EventHandler<CaseQuery>,
}

#[component]
pub fn CaseLookupForm(props: CaseLookupFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;

    rsx! {
        div {
            class: "form-card",
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();

                    let query = state().query;
                    // `required` normally stops this before we get here
                    if !validate_query_complete(&query) {
                        console_warn!(
                            "[Case Lookup] Submit ignored: {}",
                            get_query_validation_message(&query).unwrap_or_default()
                        );
                        return;
                    }
                    on_submit.call(query);
                },

                div {
                    class: "form-grid",
                    for field in CaseField::ALL {
                        CaseFieldInput {
                            key: "{field.name()}",
                            field: field,
                            value: state().query.get(field).to_string(),
                            on_change: move |value: String| {
                                console_debug!("[Case Lookup] {} changed", field.name());
                                dispatch.call(LookupAction::UpdateField(field, value));
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        disabled: state().is_loading(),
                        "{state().submit_label()}"
                    }
                }
            }
        }
    }
}
