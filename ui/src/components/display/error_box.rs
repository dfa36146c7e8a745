use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBoxProps {
    pub message: String,
}

#[component]
pub fn ErrorBox(props: ErrorBoxProps) -> Element {
    rsx! {
        div {
            class: "error-box",
            p { strong { "Error" } }
            p { class: "error-message", "{props.message}" }
        }
    }
}
