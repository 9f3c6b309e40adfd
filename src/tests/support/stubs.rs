use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::portfolio::application::use_cases::check_slug_availability::{
    CheckSlugAvailabilityUseCase, CheckSlugError, SlugAvailability,
};
use crate::portfolio::application::use_cases::fetch_portfolio::{
    FetchPortfolioError, FetchPortfolioUseCase,
};
use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;

type FetchResult = Result<PortfolioData, FetchPortfolioError>;

// ============================================================
// Fetch portfolio
// ============================================================

/// Answers every request with the same result and counts calls.
pub struct StubFetchPortfolioUseCase {
    result: FetchResult,
    calls: AtomicUsize,
    sessions: std::sync::Mutex<Vec<SessionContext>>,
}

impl StubFetchPortfolioUseCase {
    pub fn success(data: PortfolioData) -> Self {
        Self::with_result(Ok(data))
    }

    pub fn failure(err: FetchPortfolioError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: FetchResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            sessions: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_sessions(&self) -> Vec<SessionContext> {
        self.sessions.lock().unwrap().clone()
    }
}

#[async_trait]
impl FetchPortfolioUseCase for StubFetchPortfolioUseCase {
    async fn execute(
        &self,
        _portfolio_id: &PortfolioId,
        session: &SessionContext,
    ) -> Result<PortfolioData, FetchPortfolioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sessions.lock().unwrap().push(session.clone());
        self.result.clone()
    }
}

/// Holds each request open until the test releases it through the matching sender.
pub struct GatedFetchPortfolioUseCase {
    gates: Mutex<HashMap<String, oneshot::Receiver<FetchResult>>>,
    calls: AtomicUsize,
}

impl GatedFetchPortfolioUseCase {
    pub fn new(ids: &[&str]) -> (Self, HashMap<String, oneshot::Sender<FetchResult>>) {
        let mut receivers = HashMap::new();
        let mut senders = HashMap::new();
        for id in ids {
            let (tx, rx) = oneshot::channel();
            senders.insert(id.to_string(), tx);
            receivers.insert(id.to_string(), rx);
        }

        let stub = Self {
            gates: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        };
        (stub, senders)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FetchPortfolioUseCase for GatedFetchPortfolioUseCase {
    async fn execute(
        &self,
        portfolio_id: &PortfolioId,
        _session: &SessionContext,
    ) -> Result<PortfolioData, FetchPortfolioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().await.remove(portfolio_id.as_str());
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(FetchPortfolioError::Unavailable("gate dropped".to_string()))
            }),
            None => Err(FetchPortfolioError::Unavailable(format!(
                "no gate for {portfolio_id}"
            ))),
        }
    }
}

// ============================================================
// Portfolio query (readiness)
// ============================================================

pub struct StubPortfolioQuery {
    reachable: bool,
}

impl StubPortfolioQuery {
    pub fn reachable() -> Arc<Self> {
        Arc::new(Self { reachable: true })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self { reachable: false })
    }
}

#[async_trait]
impl PortfolioQuery for StubPortfolioQuery {
    async fn fetch_portfolio(
        &self,
        _portfolio_id: &PortfolioId,
        _session: &SessionContext,
    ) -> Result<PortfolioData, PortfolioQueryError> {
        unimplemented!("Not used in this test")
    }

    async fn ping(&self) -> Result<(), PortfolioQueryError> {
        if self.reachable {
            Ok(())
        } else {
            Err(PortfolioQueryError::Network("connection refused".to_string()))
        }
    }
}

// ============================================================
// Slug availability
// ============================================================

#[derive(Clone)]
pub struct StubCheckSlugAvailabilityUseCase {
    result: Result<SlugAvailability, CheckSlugError>,
}

impl StubCheckSlugAvailabilityUseCase {
    pub fn available(slug: &str, available: bool) -> Self {
        Self {
            result: Ok(SlugAvailability {
                slug: slug.to_string(),
                available,
            }),
        }
    }

    pub fn error(err: CheckSlugError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CheckSlugAvailabilityUseCase for StubCheckSlugAvailabilityUseCase {
    async fn execute(&self, _slug: &str) -> Result<SlugAvailability, CheckSlugError> {
        self.result.clone()
    }
}
