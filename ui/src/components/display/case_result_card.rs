use dioxus::prelude::*;

use crate::components::display::OrdersTable;
use crate::services::client::CaseResult;

#[derive(Props, PartialEq, Clone)]
pub struct CaseResultCardProps {
    pub result: CaseResult,
}

#[component]
pub fn CaseResultCard(props: CaseResultCardProps) -> Element {
    let result = props.result;

    rsx! {
        div {
            class: "result-card",
            h2 { class: "section-title", "Case Details" }

            div {
                class: "result-grid",
                div {
                    h3 { "Parties" }
                    p { "{result.party_names}" }
                }
                div {
                    h3 { "Filing Info" }
                    p { "{result.filing_date}" }
                }
                div {
                    h3 { "Next Hearing Date" }
                    p { "{result.next_hearing_date}" }
                }
                div {
                    h3 { "Main Orders Page" }
                    a {
                        href: "{result.orders_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View All Orders"
                    }
                }
            }

            div {
                class: "orders-section",
                h2 { class: "section-title", "Downloadable Orders" }
                OrdersTable { orders: result.orders.clone() }
            }
        }
    }
}
