//! Infrastructure modules

pub mod email;
