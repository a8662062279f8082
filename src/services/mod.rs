pub mod forwarder;
pub mod mapping;
