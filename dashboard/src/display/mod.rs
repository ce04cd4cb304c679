pub mod currency;
pub mod order_row;
pub mod revenue_chart;
pub mod summary;

pub use currency::{format_brl, format_brl_decimal, group_thousands, minor_to_decimal};
