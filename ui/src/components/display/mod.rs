pub mod backend_status_banner;
pub mod case_result_card;
pub mod error_box;
pub mod loading_indicator;
pub mod orders_table;
pub mod request_state_panel;

pub use backend_status_banner::*;
pub use case_result_card::*;
pub use error_box::*;
pub use loading_indicator::*;
pub use orders_table::*;
pub use request_state_panel::*;
