//! Document models and request DTOs.

pub mod movie;
