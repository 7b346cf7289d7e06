//! # Padmark Architecture
//!
//! Padmark is a **UI-agnostic note editor core**. This is not a web app that
//! happens to have some library code—it's a library that happens to have
//! browser-shaped hosts. The host owns the surfaces (DOM, webview, terminal);
//! padmark owns the behavior.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (yours)                                         │
//! │  - Binds real surfaces, forwards raw events                 │
//! │  - The ONLY place that touches DOM/clipboard/print APIs     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ ViewHost / Clipboard / ExportSink
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade Layer (app.rs)                                      │
//! │  - Thin wiring of events to the core                        │
//! │  - Owns the store, the scheduler, the sinks                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Layer (controller, cursor, classify, render,          │
//! │              autosave)                                      │
//! │  - Pure logic: state machine, position math, heuristics     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (durable), MemoryStore (ephemeral, testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core Idea
//!
//! The interesting part is the edit↔preview swap. Double-clicking the
//! preview replaces it with a plain-text edit surface whose DOM has nothing
//! in common with the rendered markup, so "where was the user looking" must
//! travel as a number: the click's pixel Y is mapped to a character offset
//! ([`cursor`]), carried across the swap, and mapped back when the views
//! trade places again. Content that would be mangled by markdown rendering
//! (pasted HTML, angle-bracket-heavy code) is detected by a tag-density
//! heuristic ([`classify`]) and shown literally instead.
//!
//! ## Single-Threaded by Design
//!
//! Everything runs on the host's one UI thread. The two time-based behaviors
//! — the autosave debounce and the pre-print settle delay — are deadlines
//! polled from the host's event loop ([`NoteApp::tick`](app::NoteApp::tick)),
//! not timers on other threads. Hosts porting this to a threaded environment
//! must serialize all calls through one owner.
//!
//! ## Module Overview
//!
//! - [`app`]: The facade—entry point for all host events
//! - [`controller`]: The edit/preview state machine and `ViewHost` trait
//! - [`cursor`]: Pixel ↔ character-offset mapping
//! - [`classify`]: Plain-text vs markup detection
//! - [`render`]: Markdown/plain rendering with defensive HTML escaping
//! - [`autosave`]: Debounced persistence scheduling
//! - [`export`]: Download/print payload building
//! - [`clipboard`]: Copy capability with fallback
//! - [`store`]: Storage abstraction, scoped routing, and backends
//! - [`theme`]: Light/dark toggle service
//! - [`model`]: Core data types (`Document`, `ViewMode`, `StorageScope`)
//! - [`config`]: Layout metrics and timing knobs
//! - [`error`]: Error types

pub mod app;
pub mod autosave;
pub mod classify;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod store;
pub mod theme;
