//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render the marketing page and read/write the shared state
//! signals that `App` provides as context. Static copy lives in const tables
//! next to the section that renders it.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod lazy_image;
pub mod nav_bar;
pub mod notification_banner;
pub mod portfolio;
pub mod reveal;
pub mod scroll_to_top;
pub mod services;
pub mod setup_guide_modal;
pub mod stat_counter;
pub mod tech_stack;
