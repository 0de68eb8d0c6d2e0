//! Transmission Diag - Business Transmission Readiness Diagnostic
//!
//! This crate implements the scoring core of a business-transmission
//! (succession) diagnostic: a catalogue of weighted questions grouped by
//! domain, optionally extended per business sector, scored per answer,
//! per domain, and globally, then classified into qualitative tiers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
