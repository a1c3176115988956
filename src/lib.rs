//! ideagen - guided start-up idea wizard
//!
//! Seven selection steps narrow an idea down (focus, industry, sub-industry,
//! technology, business model, audience, market segment); the last one sends
//! a single prompt to a text-generation service and shows the ten problem
//! statements it suggests.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod env_vars;
pub mod error;
pub mod generator;
pub mod logging;
pub mod ui;
pub mod wizard;

pub use error::{ConfigurationError, GenerationError, WizardError};
pub use generator::SuggestionGenerator;
pub use wizard::{SelectionSet, WizardPhase, WizardState, WizardStep};
