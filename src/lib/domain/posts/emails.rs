//! Post notification email templates

pub mod created;
pub mod updated;
