pub mod clock_in;
pub mod clock_out;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod log;
pub mod plot;
pub mod show;
pub mod total;
