//! Server-held keyword view with stale-response protection.
//!
//! Every navigation takes a fresh request token. A keyword report that
//! resolves after a newer navigation has started is dropped on arrival, so
//! out-of-order completion never shows the wrong keyword.

use serde::Serialize;
use tracing::{info, instrument, warn, Span};

use trendscope_core::{logging, ContentIdea, Latest};

use crate::error::ApiError;
use crate::services::dashboard::{DashboardService, KeywordReport};

/// What the keyword view currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum KeywordView {
    Ready(KeywordReport),
    Failed { keyword: String, error: String },
}

impl KeywordView {
    pub fn keyword(&self) -> &str {
        match self {
            KeywordView::Ready(report) => &report.keyword,
            KeywordView::Failed { keyword, .. } => keyword,
        }
    }
}

/// Keyword view shared by all requests.
#[derive(Debug, Default)]
pub struct ViewState {
    keyword: Latest<KeywordView>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current keyword view, if any navigation has completed.
    pub async fn current(&self) -> Option<KeywordView> {
        self.keyword.get().await
    }

    /// Load the report for `keyword` and make it the current view.
    ///
    /// Returns [`ApiError::Conflict`] when a newer navigation started before
    /// this one resolved. A failed load still becomes the current view.
    #[instrument(
        skip(self, service, keyword),
        fields(
            subsystem = "api",
            component = "view_state",
            op = "navigate",
            keyword = %keyword,
            request_token = tracing::field::Empty,
            stale = tracing::field::Empty,
        )
    )]
    pub async fn navigate(
        &self,
        service: &DashboardService,
        keyword: &str,
    ) -> Result<KeywordReport, ApiError> {
        let token = self.keyword.begin();
        Span::current().record(logging::REQUEST_TOKEN, token.value());

        let view = match service.keyword_report(keyword).await {
            Ok(report) => KeywordView::Ready(report),
            Err(e) => KeywordView::Failed {
                keyword: keyword.to_string(),
                error: ApiError::from(e).to_string(),
            },
        };

        let applied = self.keyword.apply(token, view.clone()).await;
        Span::current().record(logging::STALE, !applied);
        if !applied {
            warn!("Keyword view superseded before it resolved");
            return Err(ApiError::Conflict(format!(
                "Request for \"{}\" was superseded by a newer request",
                keyword
            )));
        }

        match view {
            KeywordView::Ready(report) => {
                info!("Keyword view updated");
                Ok(report)
            }
            KeywordView::Failed { error, .. } => Err(ApiError::Unavailable(error)),
        }
    }

    /// Regenerate ideas for the keyword currently shown.
    ///
    /// The new ideas replace the view's ideas only if no navigation happened
    /// while they were generating.
    #[instrument(
        skip(self, service),
        fields(subsystem = "api", component = "view_state", op = "regenerate_ideas")
    )]
    pub async fn regenerate_ideas(
        &self,
        service: &DashboardService,
    ) -> Result<Vec<ContentIdea>, ApiError> {
        let (token, report) = match self.keyword.get_stamped().await {
            Some((token, KeywordView::Ready(report))) => (token, report),
            Some((_, KeywordView::Failed { keyword, .. })) => {
                return Err(ApiError::BadRequest(format!(
                    "No analysis available for \"{}\"",
                    keyword
                )));
            }
            None => {
                return Err(ApiError::NotFound(
                    "No keyword analysis has been loaded".to_string(),
                ));
            }
        };

        let ideas = service.regenerate_ideas(&report).await;

        let updated = self
            .keyword
            .update_if(token, |view| match view {
                KeywordView::Ready(report) => KeywordView::Ready(KeywordReport {
                    content_ideas: ideas.clone(),
                    ..report.clone()
                }),
                other => other.clone(),
            })
            .await;
        if !updated {
            warn!(keyword = %report.keyword, "Keyword view changed while ideas were generating");
            return Err(ApiError::Conflict(format!(
                "Ideas for \"{}\" are stale; the view has moved on",
                report.keyword
            )));
        }

        Ok(ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trendscope_data::{MockAnalyticsRepository, MockAnalyticsService, MockDelayConfig};
    use trendscope_inference::CreatorAssistant;

    fn service() -> DashboardService {
        let analytics = MockAnalyticsService::new(
            MockAnalyticsRepository::with_seed(3),
            MockDelayConfig::instant(),
        );
        DashboardService::new(Arc::new(analytics), CreatorAssistant::unconfigured())
    }

    #[tokio::test]
    async fn test_navigate_sets_current_view() {
        let view = ViewState::new();
        let report = view.navigate(&service(), "pottery").await.unwrap();

        assert_eq!(report.keyword, "pottery");
        assert_eq!(report.content_ideas, report.analysis.content_ideas);
        assert_eq!(view.current().await, Some(KeywordView::Ready(report)));
    }

    #[tokio::test]
    async fn test_regenerate_without_view_is_not_found() {
        let view = ViewState::new();
        let err = view.regenerate_ideas(&service()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_regenerate_replaces_ideas() {
        let service = service();
        let view = ViewState::new();
        view.navigate(&service, "pottery").await.unwrap();

        let ideas = view.regenerate_ideas(&service).await.unwrap();

        // Unconfigured assistant answers with its single explanatory idea.
        assert_eq!(ideas.len(), 1);
        match view.current().await {
            Some(KeywordView::Ready(report)) => assert_eq!(report.content_ideas, ideas),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_view_serializes_with_status_tag() {
        let view = KeywordView::Failed {
            keyword: "yoga".to_string(),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["keyword"], "yoga");
        assert_eq!(view.keyword(), "yoga");
    }
}
