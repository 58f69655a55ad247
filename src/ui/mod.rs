// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, styles, theming, and the screen components.

pub mod design_tokens;
pub mod reader;
pub mod spinner;
pub mod styles;
pub mod swipe_gate;
pub mod theme;
