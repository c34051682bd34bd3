pub mod bucket;
pub mod log;
