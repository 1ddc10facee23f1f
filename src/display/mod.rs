//! Display formatting for terminal output

pub mod record;
pub mod summary;

pub use record::{format_date, format_record_details, format_record_table};
pub use summary::{format_category_breakdown, format_summary_line, sign_color};
