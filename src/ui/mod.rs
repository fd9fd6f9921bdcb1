// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, styles, widgets, and panels.

pub mod design_tokens;
pub mod navbar;
pub mod panels;
pub mod styles;
pub mod theming;
pub mod widgets;
