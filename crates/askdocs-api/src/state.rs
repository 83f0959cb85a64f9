//! Application state wiring all services together.
//!
//! Everything process-wide -- the loaded index, the tool registry, the
//! provider clients -- is constructed exactly once here and held
//! immutably for the process lifetime, so initialization order and
//! failure points stay explicit.

use std::sync::Arc;

use askdocs_core::agent::box_strategy::BoxReasoningStrategy;
use askdocs_core::agent::router::AgentRouter;
use askdocs_core::embed::box_embedder::BoxEmbedder;
use askdocs_core::index::box_search::BoxChunkSearch;
use askdocs_core::tool::box_tool::BoxTool;
use askdocs_core::tool::doc_search::DocSearchTool;
use askdocs_core::tool::general::GeneralTool;
use askdocs_core::tool::registry::ToolRegistry;
use askdocs_infra::embed::openai::OpenAiEmbedder;
use askdocs_infra::index::lance::ChunkIndex;
use askdocs_infra::llm::strategy::OpenAiStrategy;
use askdocs_infra::tool::report::ExternalReportTool;
use askdocs_infra::tool::sentiment::SentimentAnalysisTool;
use askdocs_infra::tool::telegram::{
    DirectTelegramMessageTool, FindChatIdByNameTool, TelegramApi, TelegramMessageTool,
};
use askdocs_types::config::ServiceConfig;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AgentRouter>,
}

impl AppState {
    /// Initialize the application state: load the index, register the
    /// tools, wire the router.
    ///
    /// Fails fast -- a missing index or unreachable store aborts startup
    /// before the listener binds.
    pub async fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        let embedder = BoxEmbedder::new(OpenAiEmbedder::new(config.openai_api_key.clone()));
        let index = ChunkIndex::open(&config.index_dir, embedder).await?;

        let telegram = Arc::new(TelegramApi::new(config.telegram_bot_token.clone()));

        let registry = ToolRegistry::new(vec![
            BoxTool::new(DocSearchTool::new(BoxChunkSearch::new(index))),
            BoxTool::new(GeneralTool),
            BoxTool::new(ExternalReportTool::new()),
            BoxTool::new(SentimentAnalysisTool::new(config.hf_api_token.clone())),
            BoxTool::new(TelegramMessageTool::new(
                telegram.clone(),
                config.telegram_chat_id.clone(),
            )),
            BoxTool::new(DirectTelegramMessageTool::new(telegram.clone())),
            BoxTool::new(FindChatIdByNameTool::new(telegram)),
        ]);

        let strategy = BoxReasoningStrategy::new(OpenAiStrategy::new(
            config.openai_api_key.clone(),
            config.model.clone(),
        ));

        Ok(Self {
            router: Arc::new(AgentRouter::new(strategy, registry)),
        })
    }

    /// Build a state around an already-wired router (tests).
    pub fn with_router(router: AgentRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
