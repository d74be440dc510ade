//! Wire models for the OneBot v11 surface this adapter consumes.

pub mod api;
pub mod event;
