//! colima-bar - a menu bar switcher for colima instances
//!
//! Lists the instances managed by `colima`, keeps exactly one of them
//! running on request, and points the docker CLI at its context.

pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod instances;
pub mod logging;
pub mod runner;

#[cfg(target_os = "macos")]
pub mod app;
#[cfg(target_os = "macos")]
pub mod tray;
