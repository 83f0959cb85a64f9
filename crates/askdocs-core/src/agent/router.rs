//! Per-request agent routing loop.
//!
//! AgentRouter coordinates the decide/dispatch cycle: it hands the tool
//! descriptors and the step transcript to the reasoning strategy, runs
//! the chosen tool through the registry, feeds the observation back, and
//! repeats until the strategy finishes or the step budget runs out.
//! Each run starts fresh -- there is no memory across requests.

use tracing::{debug, info_span, warn, Instrument};

use askdocs_types::agent::{AgentStep, Decision};
use askdocs_types::error::AgentError;

use crate::tool::registry::ToolRegistry;

use super::box_strategy::BoxReasoningStrategy;

/// Step budget per request.
pub const DEFAULT_MAX_STEPS: usize = 15;

/// Answer returned when the step budget is exhausted before the strategy
/// finishes.
pub const ITERATION_LIMIT_ANSWER: &str = "Agent stopped due to iteration limit.";

/// Routes one query through the strategy and the tool registry.
pub struct AgentRouter {
    strategy: BoxReasoningStrategy,
    registry: ToolRegistry,
    max_steps: usize,
}

impl AgentRouter {
    pub fn new(strategy: BoxReasoningStrategy, registry: ToolRegistry) -> Self {
        Self {
            strategy,
            registry,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Override the per-request step budget.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Run one query to a final answer.
    ///
    /// Tool failures never surface here -- they travel in-band inside
    /// observations. The only error paths are strategy failures.
    pub async fn run(&self, query: &str) -> Result<String, AgentError> {
        let descriptors = self.registry.descriptors();
        let mut steps: Vec<AgentStep> = Vec::new();

        for step_index in 0..self.max_steps {
            let span = info_span!("agent.step", step = step_index, query_len = query.len());

            let decision = self
                .strategy
                .decide(query, &descriptors, &steps)
                .instrument(span)
                .await?;

            match decision {
                Decision::Finish { answer } => {
                    debug!(steps = steps.len(), "agent finished");
                    return Ok(answer);
                }
                Decision::UseTool { tool, input } => {
                    debug!(tool = %tool, "agent selected tool");
                    let observation = self.registry.dispatch(&tool, &input).await;
                    steps.push(AgentStep {
                        tool,
                        input,
                        observation,
                    });
                }
            }
        }

        warn!(
            max_steps = self.max_steps,
            "agent exhausted its step budget without a final answer"
        );
        Ok(ITERATION_LIMIT_ANSWER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use askdocs_types::agent::ToolDescriptor;

    use crate::agent::strategy::ReasoningStrategy;
    use crate::tool::box_tool::BoxTool;
    use crate::tool::general::GeneralTool;

    use super::*;

    /// Picks GeneralTool once, then answers with its observation.
    struct GeneralThenFinish;

    impl ReasoningStrategy for GeneralThenFinish {
        async fn decide(
            &self,
            query: &str,
            _tools: &[ToolDescriptor],
            steps: &[AgentStep],
        ) -> Result<Decision, AgentError> {
            match steps.first() {
                None => Ok(Decision::UseTool {
                    tool: "GeneralTool".to_string(),
                    input: query.to_string(),
                }),
                Some(step) => Ok(Decision::Finish {
                    answer: step.observation.clone(),
                }),
            }
        }
    }

    /// Never finishes; keeps selecting the same tool.
    struct NeverFinishes;

    impl ReasoningStrategy for NeverFinishes {
        async fn decide(
            &self,
            query: &str,
            _tools: &[ToolDescriptor],
            _steps: &[AgentStep],
        ) -> Result<Decision, AgentError> {
            Ok(Decision::UseTool {
                tool: "GeneralTool".to_string(),
                input: query.to_string(),
            })
        }
    }

    struct FailingStrategy;

    impl ReasoningStrategy for FailingStrategy {
        async fn decide(
            &self,
            _query: &str,
            _tools: &[ToolDescriptor],
            _steps: &[AgentStep],
        ) -> Result<Decision, AgentError> {
            Err(AgentError::Provider("connection refused".to_string()))
        }
    }

    fn general_registry() -> ToolRegistry {
        ToolRegistry::new(vec![BoxTool::new(GeneralTool)])
    }

    #[tokio::test]
    async fn test_run_feeds_observation_back_into_answer() {
        let router = AgentRouter::new(
            BoxReasoningStrategy::new(GeneralThenFinish),
            general_registry(),
        );

        let answer = router.run("anything").await.unwrap();
        assert_eq!(answer, "General tool response: anything");
    }

    #[tokio::test]
    async fn test_run_returns_fixed_answer_on_step_budget_exhaustion() {
        let router = AgentRouter::new(
            BoxReasoningStrategy::new(NeverFinishes),
            general_registry(),
        )
        .with_max_steps(3);

        let answer = router.run("loop forever").await.unwrap();
        assert_eq!(answer, ITERATION_LIMIT_ANSWER);
    }

    #[tokio::test]
    async fn test_run_propagates_strategy_errors() {
        let router = AgentRouter::new(
            BoxReasoningStrategy::new(FailingStrategy),
            general_registry(),
        );

        let err = router.run("anything").await.unwrap_err();
        assert!(matches!(err, AgentError::Provider(_)));
    }

    #[tokio::test]
    async fn test_unknown_tool_selection_becomes_observation_not_error() {
        /// Selects a tool that is not registered, then finishes with the
        /// observation it got back.
        struct SelectsMissingTool;

        impl ReasoningStrategy for SelectsMissingTool {
            async fn decide(
                &self,
                _query: &str,
                _tools: &[ToolDescriptor],
                steps: &[AgentStep],
            ) -> Result<Decision, AgentError> {
                match steps.first() {
                    None => Ok(Decision::UseTool {
                        tool: "Nonexistent".to_string(),
                        input: String::new(),
                    }),
                    Some(step) => Ok(Decision::Finish {
                        answer: step.observation.clone(),
                    }),
                }
            }
        }

        let router = AgentRouter::new(
            BoxReasoningStrategy::new(SelectsMissingTool),
            general_registry(),
        );

        let answer = router.run("anything").await.unwrap();
        assert!(answer.contains("Error"));
        assert!(answer.contains("Nonexistent"));
    }
}
