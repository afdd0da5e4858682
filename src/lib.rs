//! Synthetic users for load testing the quiz web application.
//!
//! Two user classes are available, each a goose scenario:
//! [`scenarios::normal_user`] walks through the quiz the way a person would,
//! [`scenarios::answering_user`] does nothing but post random answer sets.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod metrics;
pub mod payload;
pub mod runner;
pub mod scenarios;
