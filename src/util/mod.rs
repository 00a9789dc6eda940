//! Utility helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure math and validation live beside the browser glue in `dom` and the
//! timer wiring in `notify`, so sections only compose them.

pub mod counter;
pub mod dom;
pub mod notify;
pub mod reveal;
pub mod scroll_math;
pub mod validation;
