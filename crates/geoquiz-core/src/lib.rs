//! geoquiz-core — Quiz catalog, session scoring, and country resolution.
//!
//! This crate defines the data model, the collaborator traits for location
//! and reverse geocoding, and the session state machine that the rest of
//! geoquiz builds on.

pub mod catalog;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod session;
pub mod traits;

pub use catalog::QuizCatalog;
pub use error::{OrchestratorError, ResolveError, SessionError};
pub use model::{Coordinates, Country, Question, ScoreResult, Verdict};
pub use orchestrator::{OrchestratorConfig, SessionOrchestrator, SessionState};
pub use resolver::{CountryResolver, Resolution};
pub use session::QuizSession;
