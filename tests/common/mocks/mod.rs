//! Mock implementations for external dependencies

use async_trait::async_trait;
use codetionary::utils::openrouter::{Completer, CompletionResult};
use mockall::mock;

mock! {
    pub Completer {}

    #[async_trait]
    impl Completer for Completer {
        async fn complete(&self, model: &str, prompt: &str) -> CompletionResult;
    }
}
