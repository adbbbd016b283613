//! Interactive carousel engine for the course catalog.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! geometry and motion of the catalog's draggable carousels: translating raw
//! pointer events into gestures, turning gestures into item poses for one of
//! three layout strategies, and driving snap, momentum and autoplay animation
//! one frame at a time. The host page is responsible only for wiring DOM
//! events to the engine, calling [`engine::Engine::frame`] from
//! `requestAnimationFrame` while the engine asks for frames, and acting on the
//! returned [`engine::Action`]s (navigation on activated clicks).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`registry`] | Per-container engine instances and double-init prevention |
//! | [`layout`] | Ring, depth and momentum layout strategies |
//! | [`input`] | Gesture state machine and click suppression |
//! | [`pointer`] | Mouse/touch normalization into container coordinates |
//! | [`scheduler`] | Single-loop animation scheduling and easing |
//! | [`resize`] | Container/item measurements and geometry recomputation |
//! | [`render`] | Pose to CSS style projection |
//! | [`dom`] | `web_sys` event and measurement bridge |
//! | [`config`] | Per-instance tuning options and presets |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric defaults |

pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod pointer;
pub mod registry;
pub mod render;
pub mod resize;
pub mod scheduler;
