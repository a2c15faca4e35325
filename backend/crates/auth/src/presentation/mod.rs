//! Presentation Layer
//!
//! HTTP handlers, DTOs, rule tables and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod rules;
