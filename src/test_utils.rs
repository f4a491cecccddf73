// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a scripted resource loader.
//!
//! [`ScriptedLoader`] serves fixed documents or failures per locator, can
//! delay individual locators to force a completion order, and records every
//! locator it was asked for. Clones share the script and the record.

use crate::application::port::{LoadError, ResourceLoader};
use crate::domain::content::{ContentDocument, Locator};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct Script {
    responses: HashMap<String, Result<String, LoadError>>,
    delays: HashMap<String, Duration>,
    fetched: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedLoader {
    script: Rc<RefCell<Script>>,
}

impl ScriptedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, locator: &str, document: ContentDocument) -> Self {
        let text = document.to_json().expect("document serializes");
        self.with_text(locator, text)
    }

    pub fn with_text(self, locator: &str, text: impl Into<String>) -> Self {
        self.script
            .borrow_mut()
            .responses
            .insert(locator.to_string(), Ok(text.into()));
        self
    }

    pub fn with_error(self, locator: &str, error: LoadError) -> Self {
        self.script
            .borrow_mut()
            .responses
            .insert(locator.to_string(), Err(error));
        self
    }

    pub fn with_delay(self, locator: &str, delay: Duration) -> Self {
        self.script
            .borrow_mut()
            .delays
            .insert(locator.to_string(), delay);
        self
    }

    /// Locators requested so far, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.script.borrow().fetched.clone()
    }
}

impl ResourceLoader for ScriptedLoader {
    async fn fetch(&self, locator: &Locator) -> Result<String, LoadError> {
        let delay = {
            let mut script = self.script.borrow_mut();
            script.fetched.push(locator.to_string());
            script.delays.get(locator.as_str()).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.script
            .borrow()
            .responses
            .get(locator.as_str())
            .cloned()
            .unwrap_or_else(|| Err(LoadError::NotFound(locator.to_string())))
    }
}
