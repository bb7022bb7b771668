//! Application layer owning session state.
//!
//! This module sits between the entry point (main.rs) and the domain, loader,
//! and query layers. It holds the explicit state container the UI binds to:
//! the full record collection, the current filter, and the derived view.
//!
//! # Data flow
//!
//! ```text
//! Loader → records → CatalogSession ← FilterUpdate (user input)
//!                         │
//!                         ├── filtered view  (query::apply, fresh each change)
//!                         └── statistics     (query::summarize, per load)
//! ```
//!
//! # Modules
//!
//! - [`session`]: Central catalog state container

pub mod session;

pub use session::CatalogSession;
