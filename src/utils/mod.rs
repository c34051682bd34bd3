pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::title_case;
pub use time::format_elapsed;
