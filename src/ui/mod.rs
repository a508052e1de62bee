// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, shared styles, the page and its
//! components, and the scroll-driven effects that tie them together.

pub mod contact_form;
pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod scroll_effects;
pub mod styles;
