//! Communication domain modules

pub mod composer;
pub mod email_addresses;
pub mod transport;
