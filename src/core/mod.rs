//! # Core Logic
//!
//! Option groups and the selection state machine behind them.
//! It knows nothing about how options are shown or where taps come from.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • GroupOption (defs)   │
//!                    │  • Selection (state)    │
//!                    │  • Tap (events)         │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Console   │      │ Observable │      │  Screens   │
//!     │  Adapter   │      │  (watch)   │      │ (embedder) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`option`]: `GroupOption` and `Choice`, the immutable definitions
//! - [`selection`]: `Selection`, the one piece of mutable state
//! - [`model`]: `OptionGroupModel`, the transition logic
//! - [`action`]: `Tap` and `update()`
//! - [`observable`]: change notification over a watch channel
//! - [`definition`]: TOML group definitions
//! - [`config`]: runtime settings

pub mod action;
pub mod config;
pub mod definition;
pub mod error;
pub mod model;
pub mod observable;
pub mod option;
pub mod selection;

// Re-export commonly used types for convenience
pub use action::Tap;
pub use error::GroupError;
pub use model::OptionGroupModel;
pub use option::{Choice, GroupOption};
pub use selection::{ChosenSet, Selection};
