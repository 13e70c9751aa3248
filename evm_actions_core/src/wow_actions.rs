//! Zora Wow memecoin actions for the EVM agent kit.
//!
//! Includes: Wow ERC20 memecoin creation via the factory contract on Base.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::actions::{Action, ActionExample, ActionMetadata, ActionRegistry};
use crate::error::ActionError;
use crate::wallet::{ContractCall, Wallet};
use evm_actions_wow::{deploy_args, factory_address, wow_factory_abi};

// =============================================================================
// CREATE_WOW_TOKEN - Deploy a Zora Wow ERC20 memecoin
// =============================================================================

const CREATE_WOW_TOKEN_PROMPT: &str = "\
This tool will deploy a Zora Wow ERC20 memecoin through the Wow factory contract. \
It requires a token name and symbol; the token is created for the wallet's default address \
with generic metadata and no platform referrer. \
This operation is supported on Base Sepolia and Base Mainnet.";

/// Outcome of a successful token creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreation {
    pub name: String,
    pub symbol: String,
    pub network_id: String,
    pub transaction_hash: String,
    pub transaction_link: String,
}

#[derive(Debug)]
pub struct CreateWowTokenAction {
    meta: ActionMetadata,
}

impl CreateWowTokenAction {
    pub fn new() -> Self {
        let input_schema = json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the token to create, e.g. WowCoin",
                },
                "symbol": {
                    "type": "string",
                    "description": "The symbol of the token to create, e.g. WOW",
                },
            },
            "required": ["name", "symbol"],
            "additionalProperties": false,
        });

        let examples = vec![ActionExample {
            input: json!({
                "name": "WowCoin",
                "symbol": "WOW",
            }),
            output: json!({
                "status": "success",
                "name": "WowCoin",
                "symbol": "WOW",
                "networkId": "base-sepolia",
                "transactionHash": "0xabc123...",
                "transactionLink": "https://sepolia.basescan.org/tx/0xabc123...",
            }),
            explanation: "Create a Wow memecoin named WowCoin with symbol WOW".to_string(),
        }];

        let meta = ActionMetadata {
            name: "CREATE_WOW_TOKEN".to_string(),
            similes: vec![
                "create memecoin".to_string(),
                "deploy wow token".to_string(),
                "launch erc20 memecoin".to_string(),
                "create wow erc20".to_string(),
            ],
            description: CREATE_WOW_TOKEN_PROMPT.to_string(),
            examples,
            input_schema,
        };

        Self { meta }
    }
}

/// Deploy a Wow memecoin for the wallet's default address.
///
/// The factory address is resolved from the wallet's network id before any
/// contract call is attempted; unsupported networks fail fast.
pub async fn create_wow_token(
    wallet: &dyn Wallet,
    name: &str,
    symbol: &str,
) -> Result<TokenCreation, ActionError> {
    let factory = factory_address(wallet.network_id()).ok_or_else(|| {
        ActionError::UnsupportedNetwork {
            network_id: wallet.network_id().to_string(),
        }
    })?;

    let call = ContractCall {
        contract_address: factory.to_string(),
        method: "deploy".to_string(),
        abi: wow_factory_abi(),
        args: deploy_args(wallet.default_address(), name, symbol),
    };

    let invocation = wallet
        .invoke_contract(call)
        .await
        .map_err(ActionError::invocation)?;
    let transaction = invocation.wait().await.map_err(ActionError::invocation)?;

    Ok(TokenCreation {
        name: name.to_string(),
        symbol: symbol.to_string(),
        network_id: wallet.network_id().to_string(),
        transaction_hash: transaction.transaction_hash,
        transaction_link: transaction.transaction_link,
    })
}

/// Render a token-creation outcome as the human-readable message an agent
/// relays to the user. Presentation only; callers that need structure keep
/// the `Result` itself.
pub fn render_token_creation(result: &Result<TokenCreation, ActionError>) -> String {
    match result {
        Ok(token) => format!(
            "Created WoW ERC20 memecoin {} with symbol {} on network {}.\n\
             Transaction hash for the token creation: {}\n\
             Transaction link for the token creation: {}",
            token.name,
            token.symbol,
            token.network_id,
            token.transaction_hash,
            token.transaction_link
        ),
        Err(e) => format!("Error creating Zora Wow ERC20 memecoin {e}"),
    }
}

#[async_trait]
impl Action for CreateWowTokenAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.meta
    }

    async fn call(&self, wallet: &dyn Wallet, input: Value) -> Result<Value, ActionError> {
        #[derive(Deserialize)]
        struct Input {
            name: String,
            symbol: String,
        }

        let parsed: Input = serde_json::from_value(input)
            .map_err(|e| ActionError::validation("input", e.to_string()))?;

        let token = create_wow_token(wallet, &parsed.name, &parsed.symbol).await?;

        Ok(json!({
            "status": "success",
            "name": token.name,
            "symbol": token.symbol,
            "networkId": token.network_id,
            "transactionHash": token.transaction_hash,
            "transactionLink": token.transaction_link,
        }))
    }
}

// =============================================================================
// Register wow actions
// =============================================================================

pub fn register_wow_actions(registry: &mut ActionRegistry) {
    registry.register(CreateWowTokenAction::new());
}
