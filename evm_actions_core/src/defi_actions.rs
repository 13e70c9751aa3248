//! DeFi-related actions for the EVM agent kit.
//!
//! Includes: yield opportunity comparison (placeholder pending protocol
//! rate integrations).

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::actions::{Action, ActionExample, ActionMetadata, ActionRegistry};
use crate::error::ActionError;
use crate::wallet::Wallet;

// =============================================================================
// REQUEST_YIELD_OPPORTUNITY Action (placeholder - requires rate integrations)
// =============================================================================

const REQUEST_YIELD_OPPORTUNITY_PROMPT: &str = "\
This tool will compare various yield generation options to help you select the best yield available. \
By analyzing different protocols and their respective yield rates, this tool provides insights to maximize your returns. \
It considers factors such as risk, liquidity, and duration to ensure you make informed decisions. \
It is only supported on Base Sepolia and Base Mainnet.";

#[derive(Debug)]
pub struct RequestYieldOpportunityAction {
    meta: ActionMetadata,
}

impl RequestYieldOpportunityAction {
    pub fn new() -> Self {
        let input_schema = json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false,
        });

        let examples = vec![ActionExample {
            input: json!({}),
            output: json!({
                "status": "error",
                "message": "Yield opportunity comparison is not yet implemented.",
            }),
            explanation: "Request the best available yield for the wallet's funds".to_string(),
        }];

        let meta = ActionMetadata {
            name: "REQUEST_YIELD_OPPORTUNITY".to_string(),
            similes: vec![
                "find best yield".to_string(),
                "compare yield rates".to_string(),
                "yield opportunity".to_string(),
                "maximize returns".to_string(),
            ],
            description: REQUEST_YIELD_OPPORTUNITY_PROMPT.to_string(),
            examples,
            input_schema,
        };

        Self { meta }
    }
}

#[async_trait]
impl Action for RequestYieldOpportunityAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.meta
    }

    async fn call(&self, _wallet: &dyn Wallet, _input: Value) -> Result<Value, ActionError> {
        // TODO: integrate protocol supply rates (Aave to start) and rank them.
        Ok(json!({
            "status": "error",
            "message": "Yield opportunity comparison is not yet implemented. Requires protocol rate integrations (e.g. Aave supply rates).",
        }))
    }
}

// =============================================================================
// Register all DeFi actions
// =============================================================================

pub fn register_defi_actions(registry: &mut ActionRegistry) {
    registry.register(RequestYieldOpportunityAction::new());
}
