use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;
use crate::schema;
use crate::wallet::Wallet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionExample {
    pub input: Value,
    pub output: Value,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMetadata {
    pub name: String,
    pub similes: Vec<String>,
    pub description: String,
    pub examples: Vec<ActionExample>,
    pub input_schema: Value,
}

#[async_trait]
pub trait Action: Send + Sync {
    fn metadata(&self) -> &ActionMetadata;

    async fn call(&self, wallet: &dyn Wallet, input: Value) -> Result<Value, ActionError>;
}

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    pub fn register<A>(&mut self, action: A)
    where
        A: Action + 'static,
    {
        let action = Arc::new(action) as Arc<dyn Action>;
        let name = action.metadata().name.clone();
        self.actions.insert(name, action);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn all(&self) -> Vec<Arc<dyn Action>> {
        self.actions.values().cloned().collect()
    }

    /// Execute an action by name with the given JSON input.
    ///
    /// The input is validated against the action's schema first; the handler
    /// never sees malformed input and the wallet is never touched for it.
    pub async fn execute(
        &self,
        name: &str,
        wallet: &dyn Wallet,
        input: Value,
    ) -> Result<Value, ActionError> {
        let action = self.get(name).ok_or_else(|| ActionError::UnknownAction {
            name: name.to_string(),
        })?;
        schema::validate(&input, &action.metadata().input_schema)?;
        action.call(wallet, input).await
    }

    /// Return metadata for all registered actions (useful for AI tool schemas).
    pub fn metadata(&self) -> Vec<ActionMetadata> {
        self.actions
            .values()
            .map(|a| a.metadata().clone())
            .collect()
    }
}
