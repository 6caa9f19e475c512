// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Board: client for an activity sign-up board
//!
//! This crate fetches the activity listing from the board's REST API, renders
//! it into an in-memory page, and runs the signup and unregister flows that
//! keep the page in step with the server.

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use board::Board;
pub use controller::{Event, ViewController};
