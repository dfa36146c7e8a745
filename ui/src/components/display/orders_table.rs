use dioxus::prelude::*;

use crate::services::client::OrderEntry;

pub const NO_ORDERS_MESSAGE: &str = "No downloadable orders found for this case.";

#[derive(Props, PartialEq, Clone)]
pub struct OrdersTableProps {
    pub orders: Vec<OrderEntry>,
}

/// One row per order, in the order the backend returned them
#[component]
pub fn OrdersTable(props: OrdersTableProps) -> Element {
    if props.orders.is_empty() {
        return rsx! {
            p { class: "no-orders", "{NO_ORDERS_MESSAGE}" }
        };
    }

    rsx! {
        div {
            class: "orders-table",
            div {
                class: "orders-header",
                div { "Date of Order" }
                div { "Download" }
            }
            for (index, order) in props.orders.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "order-row",
                    div { "{order.date}" }
                    div {
                        a {
                            class: "download-button",
                            href: "{order.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            download: "",
                            "Download PDF"
                        }
                    }
                }
            }
        }
    }
}
