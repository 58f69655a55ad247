// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::reader;

/// Top-level messages consumed by `App::update`. The variants forward the
/// reader component's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Reader(reader::Message),
}
