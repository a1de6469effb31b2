pub mod discovery;
pub mod resource;
pub mod review;
pub mod status;
