//! Fake generator for testing.
//!
//! Returns one scripted reply for every call and records the prompts it saw,
//! so workflow tests run without network access.

use super::{GenerationError, GenerationResult, TextGenerator};
use crate::credential::Credential;
use crate::prompt::RenderedPrompt;
use std::cell::RefCell;

#[derive(Debug)]
pub struct FakeGenerator {
    reply: Result<String, GenerationError>,
    prompts: RefCell<Vec<String>>,
    credentials: RefCell<Vec<String>>,
}

impl FakeGenerator {
    /// Succeed with `text` on every call.
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: RefCell::new(Vec::new()),
            credentials: RefCell::new(Vec::new()),
        }
    }

    /// Fail with `error` on every call.
    pub fn failing(error: GenerationError) -> Self {
        Self {
            reply: Err(error),
            prompts: RefCell::new(Vec::new()),
            credentials: RefCell::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Credentials received so far.
    pub fn credentials(&self) -> Vec<String> {
        self.credentials.borrow().clone()
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(
        &self,
        prompt: &RenderedPrompt,
        credential: &Credential,
    ) -> Result<GenerationResult, GenerationError> {
        self.prompts.borrow_mut().push(prompt.as_str().to_string());
        self.credentials
            .borrow_mut()
            .push(credential.expose().to_string());
        self.reply.clone().map(GenerationResult::new)
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}
