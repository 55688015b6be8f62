pub mod config;
pub mod debounce;
pub mod form;
pub mod lazy;
pub mod navigate;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod scrollspy;

// Controller crate: pure scroll-state derivations only. DOM wiring lives in
// crates/apps/web; nothing in here touches the browser.
pub use config::*;
pub use debounce::*;
pub use form::*;
pub use lazy::*;
pub use navigate::*;
pub use parallax::*;
pub use progress::*;
pub use reveal::*;
pub use scrollspy::*;

// ── Tests: Controller Contracts ─────────────────────────────────────────────
//
// Cross-cutting invariants over the per-module logic:
//
//  1. At most one landmark (and therefore one nav link) is active at a time,
//     and the active index never decreases while scrolling down.
//  2. Reveal flags are one-way: once set, further notifications are no-ops.
//  3. A deferred source is handed out at most once.
//  4. Progress is always in [0, 100] and finite, even for a document that
//     cannot scroll.
//  5. A debounced action fires at most once per quiet period.
