pub mod form;
pub mod webhook;
