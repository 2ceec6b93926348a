pub mod time;

pub use time::{format_date, format_datetime};
