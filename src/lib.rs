//! Sales Copilot - Real-time sales coaching backend
//!
//! Classifies a prospect's behavioral profile from what they say (and, when
//! available, how they say it) and answers with a scripted coaching
//! recommendation for the salesperson.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
