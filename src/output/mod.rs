pub mod json;
pub mod tab;
pub mod text;

pub use json::to_json;
pub use tab::{TabStyle, format_tab};
pub use text::format_text;

use std::time::SystemTime;

use chrono::{DateTime, Local};

pub(crate) fn local_time(at: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(at)
}
