//! Page behavior for the portfolio site.
//!
//! This crate is compiled to WebAssembly and attached to a static HTML page.
//! It owns everything the page does after the markup arrives: hiding the
//! loading splash, the two menu affordances, eased anchor scrolling,
//! active-link highlighting, the particle background, fade-in reveals, and
//! keyboard-navigation styling. The page's CSS decides how every state class
//! looks; this crate only decides when each class is on.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunables with defaults and optional JSON override |
//! | [`consts`] | Element selectors, state class names and fixed tuning constants |
//! | [`error`] | Error types for config parsing and browser calls |
//! | [`state`] | Page-lifetime runtime flags shared by every feature |
//! | [`debounce`] | Trailing-edge debouncing |
//! | [`frame`] | Per-frame task set driven by a single frame clock |
//! | [`preloader`] | Minimum-display splash gate |
//! | [`particles`] | Particle field and its start/stop lifecycle |
//! | [`render`] | Particle drawing onto a 2D surface |
//! | [`menu`] | Menu open/close resolution and outside-click dismissal |
//! | [`scroll`] | Eased scrolling, header state, active-section lookup |
//! | [`reveal`] | One-shot fade-in reveal tracking |
//! | [`keyboard`] | Keyboard vs pointer input modality |
//! | `browser` | DOM bindings and bootstrap (`hydrate` feature only) |
//!
//! Everything outside `browser` is free of DOM types and runs under native
//! `cargo test`; time arrives as millisecond timestamps and randomness as any
//! [`rand::Rng`].

pub mod config;
pub mod consts;
pub mod debounce;
pub mod error;
pub mod frame;
pub mod keyboard;
pub mod menu;
pub mod particles;
pub mod preloader;
pub mod render;
pub mod reveal;
pub mod scroll;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod browser;
