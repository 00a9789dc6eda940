//! Outbound network access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend of its own. The only outbound call is the
//! EmailJS send made by the contact form.

pub mod emailjs;
pub mod types;
