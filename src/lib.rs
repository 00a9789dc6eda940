//! # cloudninja-site
//!
//! Leptos + WASM client for the CloudNinja Solutions marketing site.
//!
//! Page markup is rendered by Leptos components. The behavior behind it
//! (contact form validation and submission, notifications, scroll effects,
//! counters) lives in plain state and utility modules so it can be tested on
//! the host without a browser. Browser wiring compiles only with the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
