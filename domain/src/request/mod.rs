//! Request subdomain: lifecycle phases and completion outcomes.

pub mod completion;
pub mod lifecycle;
