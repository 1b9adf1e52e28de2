pub mod did_service;
pub mod error;
