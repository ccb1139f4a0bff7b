//! Search-state synchronization engine for the book search client.
//!
//! Reconciles the address bar, the draft filter selections and the applied
//! filters that produced the displayed results. Everything here is pure: the
//! web crate owns history manipulation and network calls and feeds their
//! outcomes back through [`session::SearchSession`].

pub mod error;
pub mod filters;
pub mod languages;
pub mod lifecycle;
pub mod navigation;
pub mod session;
pub mod types;
