pub mod bucket;
pub mod session;
pub mod timer;

pub use bucket::{DayBucketMap, END_OF_DAY, Interval, START_OF_DAY};
pub use session::Session;
pub use timer::{Timer, TimerState};
