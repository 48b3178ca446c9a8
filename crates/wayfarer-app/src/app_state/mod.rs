//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Connects the window, the chrome view, the content views,
//! and the [`Browser`](wayfarer_tabs::Browser) aggregate.

mod chrome_ipc;
mod chrome_state;
mod core;
mod event_handler;
mod init;
mod layout;
mod polling;
mod shortcuts;

pub use core::WayfarerApp;
