use dioxus::prelude::*;

use crate::services::client::CaseField;

#[derive(Props, PartialEq, Clone)]
pub struct CaseFieldInputProps {
    pub field: CaseField,
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// Label plus a required text input bound to one query field
#[component]
pub fn CaseFieldInput(props: CaseFieldInputProps) -> Element {
    let name = props.field.name();

    rsx! {
        div {
            class: "form-group",
            label {
                r#for: "{name}",
                "{props.field.label()}"
            }
            input {
                r#type: "text",
                name: "{name}",
                id: "{name}",
                value: "{props.value}",
                required: true,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
