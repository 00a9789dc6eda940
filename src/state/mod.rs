//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`contact_form`, `notification`, `nav`) and
//! provided once per page as `RwSignal` context by `App`. The structs are
//! plain data with synchronous transitions; components own the DOM and timer
//! wiring.

pub mod contact_form;
pub mod nav;
pub mod notification;
