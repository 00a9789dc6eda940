//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` lays out its sections and assigns the
//! reveal stagger order.

pub mod home;
