//! Session orchestrator.
//!
//! Drives one quiz session through `Idle → Resolving → AwaitingAnswers →
//! Scored`, carrying the resolved country and the score forward in an
//! explicit [`SessionState`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::catalog::QuizCatalog;
use crate::error::{OrchestratorError, ResolveError};
use crate::model::{Coordinates, Country, Question, ScoreResult};
use crate::report::SessionReport;
use crate::resolver::{CountryResolver, Resolution};
use crate::session::QuizSession;

/// Configuration for the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    /// Upper bound on the whole resolution step. `None` waits indefinitely.
    pub resolve_timeout: Option<Duration>,
}

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Not started, or resolution failed. A failed session cannot be restarted.
    Idle { failure: Option<ResolveError> },
    /// Waiting on the location and geocoding collaborators.
    Resolving,
    /// Country known; answers are being collected. The session may hold no
    /// questions when the catalog has nothing for the country.
    AwaitingAnswers {
        resolution: Resolution,
        session: QuizSession,
    },
    /// Answers submitted. Terminal.
    Scored {
        resolution: Resolution,
        result: ScoreResult,
    },
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle { failure: None } => "idle",
            SessionState::Idle { failure: Some(_) } => "failed",
            SessionState::Resolving => "resolving",
            SessionState::AwaitingAnswers { .. } => "awaiting answers",
            SessionState::Scored { .. } => "scored",
        }
    }

    fn resolution(&self) -> Option<&Resolution> {
        match self {
            SessionState::AwaitingAnswers { resolution, .. }
            | SessionState::Scored { resolution, .. } => Some(resolution),
            _ => None,
        }
    }
}

/// Composes resolver, catalog and quiz session for a single user session.
pub struct SessionOrchestrator<'c> {
    id: Uuid,
    resolver: CountryResolver,
    catalog: &'c QuizCatalog,
    config: OrchestratorConfig,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    scored_at: Option<DateTime<Utc>>,
}

impl<'c> SessionOrchestrator<'c> {
    pub fn new(
        resolver: CountryResolver,
        catalog: &'c QuizCatalog,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            resolver,
            catalog,
            config,
            state: SessionState::Idle { failure: None },
            started_at: None,
            scored_at: None,
        }
    }

    /// Resolve the country and bind its question set.
    ///
    /// On failure the session returns to `Idle` with the failure recorded.
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn start(&mut self) -> Result<Resolution, OrchestratorError> {
        if self.state != (SessionState::Idle { failure: None }) {
            return Err(self.invalid("start"));
        }

        self.state = SessionState::Resolving;
        self.started_at = Some(Utc::now());

        let outcome = match self.config.resolve_timeout {
            Some(limit) => tokio::time::timeout(limit, self.resolver.resolve())
                .await
                .unwrap_or(Err(ResolveError::Timeout(limit.as_secs()))),
            None => self.resolver.resolve().await,
        };

        let resolution = match outcome {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!("country resolution failed: {e}");
                self.state = SessionState::Idle {
                    failure: Some(e.clone()),
                };
                return Err(e.into());
            }
        };

        let questions = self.catalog.lookup(&resolution.country).to_vec();
        if questions.is_empty() {
            tracing::info!(country = %resolution.country, "no questions available");
        } else {
            tracing::info!(
                country = %resolution.country,
                questions = questions.len(),
                "session ready"
            );
        }

        self.state = SessionState::AwaitingAnswers {
            resolution: resolution.clone(),
            session: QuizSession::start(questions),
        };
        Ok(resolution)
    }

    /// Record the answer for question `index`.
    pub fn set_answer(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), OrchestratorError> {
        match &mut self.state {
            SessionState::AwaitingAnswers { session, .. } => {
                session.set_answer(index, text)?;
                Ok(())
            }
            _ => Err(self.invalid("set an answer")),
        }
    }

    /// Score the answers and move to `Scored`.
    pub fn submit(&mut self) -> Result<ScoreResult, OrchestratorError> {
        let (resolution, result) = match &self.state {
            SessionState::AwaitingAnswers {
                resolution,
                session,
            } => {
                if session.is_empty() {
                    return Err(OrchestratorError::NoQuestions(resolution.country.clone()));
                }
                (resolution.clone(), session.submit())
            }
            _ => return Err(self.invalid("submit")),
        };

        tracing::info!(
            session = %self.id,
            correct = result.correct_count,
            total = result.total_count,
            verdict = %result.verdict(),
            "session scored"
        );

        self.scored_at = Some(Utc::now());
        self.state = SessionState::Scored {
            resolution,
            result: result.clone(),
        };
        Ok(result)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn country(&self) -> Option<&Country> {
        self.state.resolution().map(|r| &r.country)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.state.resolution().map(|r| r.coordinates)
    }

    /// Questions to present; empty outside `AwaitingAnswers`.
    pub fn questions(&self) -> &[Question] {
        match &self.state {
            SessionState::AwaitingAnswers { session, .. } => session.questions(),
            _ => &[],
        }
    }

    pub fn answers(&self) -> &[String] {
        match &self.state {
            SessionState::AwaitingAnswers { session, .. } => session.answers(),
            _ => &[],
        }
    }

    pub fn score(&self) -> Option<&ScoreResult> {
        match &self.state {
            SessionState::Scored { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ResolveError> {
        match &self.state {
            SessionState::Idle { failure } => failure.as_ref(),
            _ => None,
        }
    }

    /// Summary of a scored session; `None` before submission.
    pub fn report(&self) -> Option<SessionReport> {
        let SessionState::Scored { resolution, result } = &self.state else {
            return None;
        };
        let scored_at = self.scored_at?;
        Some(SessionReport {
            id: self.id,
            country: resolution.country.clone(),
            coordinates: resolution.coordinates,
            verdict: result.verdict(),
            score: result.clone(),
            started_at: self.started_at.unwrap_or(scored_at),
            scored_at,
        })
    }

    fn invalid(&self, action: &'static str) -> OrchestratorError {
        OrchestratorError::InvalidTransition {
            action,
            state: self.state.label(),
        }
    }
}
