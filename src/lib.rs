pub mod client;
pub mod config;
pub mod display;
pub mod logs;
pub mod mapper;
pub mod resolve;
pub mod review;
pub mod types;
