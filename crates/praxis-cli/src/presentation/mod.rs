//! # Presentation Layer
//!
//! Turns runtime results into console output using an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!  (Controller)     (Converter)        (Data)           (Driver)   ==(Text)==> [ View ] --> stdout
//!                                                                               (Layout)
//! ```
//!
//! ## Golden Rules
//!
//! ### 1. The JSON Test
//! **ViewModels carry raw data next to display strings.**
//! * `price_cents` travels with `price`, `duration_minutes` with `duration`.
//! * JSON output is an API; scripts need numbers.
//!
//! ### 2. The Layout Rule
//! `ViewMode` picks **shape** (cards or rows), never content. Both layouts
//! show the same items.
//!
//! ### 3. The Schema Stability Rule
//! `--format json` ignores `ViewMode` and color and always dumps the full
//! ViewModel, including the `state` tag of the collection view.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Decide *when* to show a tip or which badge | **`presenters/`** |
//! | Change colors, columns or card layout | **`views/`** |
//! | Reusable string helpers (truncate, highlight) | **`formatters/`** |
//! | Switch between JSON and text | **`renderers/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel, ViewMode,
};
