pub mod config;
pub mod pipeline;
pub mod shell;
pub mod storage;
pub mod utils;
