//! Tool trait definition.

use askdocs_types::error::ToolError;

/// A named callable the reasoning strategy can select.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations that talk to external services live in
/// `askdocs-infra`; pure tools live here in core.
///
/// `invoke` may fail with a [`ToolError`], but callers outside the
/// registry never see that error: the registry converts it into an
/// in-band result string.
pub trait Tool: Send + Sync {
    /// Stable tool name the strategy selects by.
    fn name(&self) -> &str;

    /// Natural-language applicability description. This wording is what
    /// the strategy matches queries against, so it is load-bearing.
    fn description(&self) -> &str;

    /// Run the tool on a single free-text input.
    fn invoke(
        &self,
        input: &str,
    ) -> impl std::future::Future<Output = Result<String, ToolError>> + Send;
}
