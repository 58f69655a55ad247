// SPDX-License-Identifier: MPL-2.0
//! `newsreel` is a small news reader built with the Iced GUI framework.
//!
//! The screen starts as a swipe prompt: dragging the knob past a fixed
//! threshold triggers a one-time fetch of a news feed, after which the
//! window becomes a paginated article reader with bounded Next/Previous
//! controls.

pub mod app;
pub mod error;
pub mod feed;
pub mod ui;
