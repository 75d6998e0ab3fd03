// src/solver.rs
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;

use crate::encoder;
use crate::errors::Result;
use crate::models::{ProblemSubmission, SolutionResult};
use crate::providers::ProviderFactory;

/// Status line attached to solutions of uploaded images.
pub const IMAGE_SUCCESS_MESSAGE: &str = "Problem processed successfully";

/// Runs a validated submission through the model.
///
/// Holds no per-request state; cloning shares the same factory.
#[derive(Clone)]
pub struct Solver {
    factory: Arc<dyn ProviderFactory>,
    model: String,
}

impl Solver {
    pub fn new(factory: Arc<dyn ProviderFactory>, model: impl Into<String>) -> Self {
        Self {
            factory,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_configured(&self) -> bool {
        self.factory.is_configured()
    }

    /// Encode, connect, call once, and wrap the answer.
    pub async fn solve(&self, request_id: &str, submission: ProblemSubmission) -> Result<SolutionResult> {
        let request = encoder::encode(&submission);
        let kind = match &submission {
            ProblemSubmission::Image(_) => "image",
            ProblemSubmission::Text(_) => "text",
        };

        let provider = self.factory.connect().map_err(|e| {
            error!("[{}] Failed to initialise the model client: {}", request_id, e);
            e
        })?;

        info!("[{}] Sending {} problem to model {}", request_id, kind, self.model);
        let start = Instant::now();

        let solution = provider.complete(&self.model, &request).await.map_err(|e| {
            error!("[{}] Model call failed: {}", request_id, e);
            e
        })?;

        info!(
            "[{}] Received solution from model ({}ms, {} chars)",
            request_id,
            start.elapsed().as_millis(),
            solution.chars().count()
        );

        let message = match submission {
            ProblemSubmission::Image(_) => Some(IMAGE_SUCCESS_MESSAGE.to_string()),
            ProblemSubmission::Text(_) => None,
        };

        Ok(SolutionResult {
            success: true,
            message,
            solution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, SolveError};
    use crate::models::{ImageSubmission, MessageContent, ModelRequest, TextSubmission};
    use crate::providers::ChatProvider;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorded {
        requests: Mutex<Vec<(String, ModelRequest)>>,
    }

    struct EchoProvider(Arc<Recorded>);

    #[async_trait]
    impl ChatProvider for EchoProvider {
        async fn complete(&self, model: &str, request: &ModelRequest) -> Result<String> {
            self.0
                .requests
                .lock()
                .unwrap()
                .push((model.to_string(), request.clone()));
            Ok("x = 2".to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatProvider for FailingProvider {
        async fn complete(&self, _model: &str, _request: &ModelRequest) -> Result<String> {
            Err(SolveError::ApiError {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    enum Mode {
        Echo(Arc<Recorded>),
        Fail,
        Unavailable,
    }

    struct TestFactory(Mode);

    impl ProviderFactory for TestFactory {
        fn connect(&self) -> Result<Box<dyn ChatProvider>> {
            match &self.0 {
                Mode::Echo(recorded) => Ok(Box::new(EchoProvider(recorded.clone()))),
                Mode::Fail => Ok(Box::new(FailingProvider)),
                Mode::Unavailable => Err(SolveError::ProviderUnavailable("no key".to_string())),
            }
        }
    }

    fn text(problem: &str) -> ProblemSubmission {
        ProblemSubmission::Text(TextSubmission {
            text: problem.to_string(),
        })
    }

    #[tokio::test]
    async fn test_text_solution() {
        let recorded = Arc::new(Recorded {
            requests: Mutex::new(Vec::new()),
        });
        let solver = Solver::new(Arc::new(TestFactory(Mode::Echo(recorded.clone()))), "pixtral-12b-2409");

        let result = solver.solve("req-1", text("Solve 2x+3=7")).await.unwrap();
        assert!(result.success);
        assert_eq!(result.message, None);
        assert_eq!(result.solution, "x = 2");

        let requests = recorded.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "pixtral-12b-2409");
        assert_eq!(
            requests[0].1.messages[1].content,
            MessageContent::Text("Solve 2x+3=7".to_string())
        );
    }

    #[tokio::test]
    async fn test_image_solution_has_message() {
        let recorded = Arc::new(Recorded {
            requests: Mutex::new(Vec::new()),
        });
        let solver = Solver::new(Arc::new(TestFactory(Mode::Echo(recorded))), "m");
        let submission = ProblemSubmission::Image(ImageSubmission {
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
            instruction: None,
        });

        let result = solver.solve("req-2", submission).await.unwrap();
        assert_eq!(result.message.as_deref(), Some(IMAGE_SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_failures_are_classified() {
        let unavailable = Solver::new(Arc::new(TestFactory(Mode::Unavailable)), "m");
        let err = unavailable.solve("req-3", text("1+1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);

        let failing = Solver::new(Arc::new(TestFactory(Mode::Fail)), "m");
        let err = failing.solve("req-4", text("1+1")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }
}
