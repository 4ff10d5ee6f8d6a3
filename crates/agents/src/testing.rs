//! Scripted chat model for tests.

use crate::model::{ChatModel, ChatRequest};
use deck_core::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned answers in order and records every request.
pub(crate) struct ScriptedModel {
    answers: RefCell<VecDeque<std::result::Result<String, String>>>,
    requests: RefCell<Vec<ChatRequest>>,
}

impl ScriptedModel {
    pub fn new(answers: Vec<&str>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().map(|a| Ok(a.to_string())).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answers: RefCell::new(VecDeque::from(vec![Err(message.to_string())])),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }
}

impl ChatModel for ScriptedModel {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        match self.answers.borrow_mut().pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(Error::HttpError(message)),
            None => Err(Error::HttpError("script exhausted".to_string())),
        }
    }
}
