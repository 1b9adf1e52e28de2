pub mod dht;
pub mod dto;
pub mod provider;

mod mapper;
