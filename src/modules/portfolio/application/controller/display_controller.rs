use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::portfolio::application::controller::state::{
    DisplayError, DisplayState, RenderedPortfolio,
};
use crate::portfolio::application::use_cases::fetch_portfolio::FetchPortfolioUseCase;
use crate::portfolio::domain::entities::{PortfolioData, PortfolioId};
use crate::session::domain::entities::SessionContext;
use crate::template::application::ports::TemplateProps;
use crate::template::application::registry::TemplateRegistry;

struct ViewState {
    /// Bumped whenever a new identifier takes over; responses carrying an older value are stale.
    generation: u64,
    current: Option<PortfolioId>,
    state: DisplayState,
}

impl ViewState {
    fn begin(&mut self, portfolio_id: PortfolioId) -> u64 {
        self.generation += 1;
        self.current = Some(portfolio_id.clone());
        self.state = DisplayState::Loading { portfolio_id };
        self.generation
    }
}

/// Binds a portfolio identifier to a rendered page for the lifetime of one mount.
///
/// The view state lock is never held while the fetch is in flight, so a newer
/// `navigate` can take over while an older request is still outstanding. The
/// older response is dropped when it eventually resolves.
pub struct PortfolioDisplayController {
    fetch: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
    registry: TemplateRegistry,
    session: SessionContext,
    is_preview: bool,
    mount_id: Uuid,
    view: Mutex<ViewState>,
}

impl PortfolioDisplayController {
    pub fn new(
        fetch: Arc<dyn FetchPortfolioUseCase + Send + Sync>,
        registry: TemplateRegistry,
        session: SessionContext,
        is_preview: bool,
    ) -> Self {
        Self {
            fetch,
            registry,
            session,
            is_preview,
            mount_id: Uuid::new_v4(),
            view: Mutex::new(ViewState {
                generation: 0,
                current: None,
                state: DisplayState::Init,
            }),
        }
    }

    pub async fn state(&self) -> DisplayState {
        self.view.lock().await.state.clone()
    }

    /// Points the controller at a (possibly absent) identifier and waits for the outcome.
    pub async fn navigate(&self, raw_id: Option<&str>) -> DisplayState {
        let portfolio_id = match PortfolioId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(mount_id = %self.mount_id, error = %e, "Portfolio route without identifier");
                let mut view = self.view.lock().await;
                view.generation += 1;
                view.current = None;
                view.state = DisplayState::Error(DisplayError::MissingIdentifier);
                return view.state.clone();
            }
        };

        let ticket = {
            let mut view = self.view.lock().await;
            if view.current.as_ref() == Some(&portfolio_id)
                && !matches!(view.state, DisplayState::Init)
            {
                return view.state.clone();
            }
            view.begin(portfolio_id.clone())
        };

        self.load(portfolio_id, ticket).await
    }

    /// Fetches the current identifier again. Without one there is nothing to do.
    pub async fn reload(&self) -> DisplayState {
        let (portfolio_id, ticket) = {
            let mut view = self.view.lock().await;
            match view.current.clone() {
                Some(id) => {
                    let ticket = view.begin(id.clone());
                    (id, ticket)
                }
                None => return view.state.clone(),
            }
        };

        self.load(portfolio_id, ticket).await
    }

    async fn load(&self, portfolio_id: PortfolioId, ticket: u64) -> DisplayState {
        info!(mount_id = %self.mount_id, portfolio_id = %portfolio_id, "Loading portfolio");

        let result = self.fetch.execute(&portfolio_id, &self.session).await;

        let mut view = self.view.lock().await;
        if view.generation != ticket {
            debug!(
                mount_id = %self.mount_id,
                portfolio_id = %portfolio_id,
                "Discarding stale portfolio response"
            );
            return view.state.clone();
        }

        view.state = match result {
            Ok(data) => self.mount(portfolio_id, data),
            Err(e) => {
                error!(
                    mount_id = %self.mount_id,
                    portfolio_id = %portfolio_id,
                    error = %e,
                    "Error fetching portfolio"
                );
                DisplayState::Error(DisplayError::FetchFailed)
            }
        };
        view.state.clone()
    }

    fn mount(&self, portfolio_id: PortfolioId, data: PortfolioData) -> DisplayState {
        let Some(renderer) = self.registry.resolve_renderer(&data.template_id) else {
            warn!(
                mount_id = %self.mount_id,
                portfolio_id = %portfolio_id,
                template_id = %data.template_id,
                "No renderer registered for template"
            );
            return DisplayState::Error(DisplayError::TemplateUnavailable {
                template_id: data.template_id,
            });
        };

        let html = renderer.render(&TemplateProps {
            data: &data,
            is_preview: self.is_preview,
        });

        DisplayState::Rendered(RenderedPortfolio {
            portfolio_id,
            template_id: renderer.template_id(),
            data,
            html,
        })
    }
}
