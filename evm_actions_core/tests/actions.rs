//! End-to-end tests for the action registry and the shipped actions,
//! driven through a stub wallet so no chain access is needed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::json;

use evm_actions_core::{
    create_wow_token, register_all_actions, render_token_creation, ActionError, ActionRegistry,
    ContractCall, InvocationHandle, Transaction, Wallet,
};

const TX_HASH: &str = "0xdeadbeefcafe";
const TX_LINK: &str = "https://sepolia.basescan.org/tx/0xdeadbeefcafe";

#[derive(Debug)]
struct StubWallet {
    network_id: String,
    address: String,
    fail_invocation: bool,
    invoked: AtomicBool,
    last_call: Mutex<Option<ContractCall>>,
}

impl StubWallet {
    fn on_network(network_id: &str) -> Self {
        Self {
            network_id: network_id.to_string(),
            address: "0xA9e1763A52a3D3D52d7fB2F5A92968bCbA1Dd6F5".to_string(),
            fail_invocation: false,
            invoked: AtomicBool::new(false),
            last_call: Mutex::new(None),
        }
    }

    fn failing(network_id: &str) -> Self {
        Self {
            fail_invocation: true,
            ..Self::on_network(network_id)
        }
    }

    fn was_invoked(&self) -> bool {
        self.invoked.load(Ordering::SeqCst)
    }
}

struct StubInvocation;

#[async_trait]
impl InvocationHandle for StubInvocation {
    async fn wait(self: Box<Self>) -> anyhow::Result<Transaction> {
        Ok(Transaction {
            transaction_hash: TX_HASH.to_string(),
            transaction_link: TX_LINK.to_string(),
        })
    }
}

#[async_trait]
impl Wallet for StubWallet {
    fn network_id(&self) -> &str {
        &self.network_id
    }

    fn default_address(&self) -> &str {
        &self.address
    }

    async fn invoke_contract(
        &self,
        call: ContractCall,
    ) -> anyhow::Result<Box<dyn InvocationHandle>> {
        self.invoked.store(true, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some(call);
        if self.fail_invocation {
            return Err(anyhow!("rpc unavailable"));
        }
        Ok(Box::new(StubInvocation))
    }
}

fn registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    register_all_actions(&mut registry);
    registry
}

#[tokio::test]
async fn create_wow_token_returns_structured_success() {
    let wallet = StubWallet::on_network("base-sepolia");
    let result = registry()
        .execute(
            "CREATE_WOW_TOKEN",
            &wallet,
            json!({ "name": "WowCoin", "symbol": "WOW" }),
        )
        .await
        .unwrap();

    assert_eq!(result["status"], "success");
    assert_eq!(result["name"], "WowCoin");
    assert_eq!(result["symbol"], "WOW");
    assert_eq!(result["networkId"], "base-sepolia");
    assert_eq!(result["transactionHash"], TX_HASH);
    assert_eq!(result["transactionLink"], TX_LINK);
}

#[tokio::test]
async fn create_wow_token_deploys_through_the_network_factory() {
    let wallet = StubWallet::on_network("base-mainnet");
    create_wow_token(&wallet, "WowCoin", "WOW").await.unwrap();

    let call = wallet.last_call.lock().unwrap().take().unwrap();
    assert_eq!(
        call.contract_address,
        "0x997020E5F59cCB79C74D527Be492Cc610CB9fA2B"
    );
    assert_eq!(call.method, "deploy");
    assert_eq!(call.args["_tokenCreator"], wallet.default_address());
    assert_eq!(call.args["_name"], "WowCoin");
    assert_eq!(call.args["_symbol"], "WOW");
}

#[tokio::test]
async fn rendered_success_contains_all_confirmation_fields() {
    let wallet = StubWallet::on_network("base-sepolia");
    let result = create_wow_token(&wallet, "WowCoin", "WOW").await;
    let message = render_token_creation(&result);

    for expected in ["WowCoin", "WOW", "base-sepolia", TX_HASH, TX_LINK] {
        assert!(message.contains(expected), "missing `{expected}` in: {message}");
    }
}

#[tokio::test]
async fn invocation_failure_is_a_tagged_error_not_a_panic() {
    let wallet = StubWallet::failing("base-sepolia");
    let result = create_wow_token(&wallet, "WowCoin", "WOW").await;

    assert_eq!(
        result,
        Err(ActionError::Invocation {
            message: "rpc unavailable".to_string(),
        })
    );

    let message = render_token_creation(&result);
    assert!(message.starts_with("Error creating Zora Wow ERC20 memecoin"));
    assert!(message.contains("rpc unavailable"));
}

#[tokio::test]
async fn unsupported_network_fails_before_any_contract_call() {
    let wallet = StubWallet::on_network("ethereum-mainnet");
    let result = create_wow_token(&wallet, "WowCoin", "WOW").await;

    assert_eq!(
        result,
        Err(ActionError::UnsupportedNetwork {
            network_id: "ethereum-mainnet".to_string(),
        })
    );
    assert!(!wallet.was_invoked());
}

#[tokio::test]
async fn missing_required_field_is_rejected_without_touching_the_wallet() {
    let wallet = StubWallet::on_network("base-sepolia");
    let err = registry()
        .execute("CREATE_WOW_TOKEN", &wallet, json!({ "symbol": "WOW" }))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ActionError::Validation {
            field: "name".to_string(),
            reason: "missing required field".to_string(),
        }
    );
    assert!(!wallet.was_invoked());
}

#[tokio::test]
async fn wrong_field_type_is_rejected_without_touching_the_wallet() {
    let wallet = StubWallet::on_network("base-sepolia");
    let err = registry()
        .execute(
            "CREATE_WOW_TOKEN",
            &wallet,
            json!({ "name": 7, "symbol": "WOW" }),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ActionError::Validation { field, .. } if field == "name"));
    assert!(!wallet.was_invoked());
}

// REQUEST_YIELD_OPPORTUNITY is a placeholder: it performs no wallet call and
// reports itself unimplemented. Replace this test when rate integrations land.
#[tokio::test]
async fn yield_opportunity_is_still_a_placeholder() {
    let wallet = StubWallet::on_network("base-mainnet");
    let result = registry()
        .execute("REQUEST_YIELD_OPPORTUNITY", &wallet, json!({}))
        .await
        .unwrap();

    assert_eq!(result["status"], "error");
    assert!(result["message"]
        .as_str()
        .unwrap()
        .contains("not yet implemented"));
    assert!(!wallet.was_invoked());
}

#[tokio::test]
async fn unknown_action_is_reported_by_name() {
    let wallet = StubWallet::on_network("base-sepolia");
    let err = registry()
        .execute("BURN_TOKEN", &wallet, json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ActionError::UnknownAction {
            name: "BURN_TOKEN".to_string(),
        }
    );
}

#[test]
fn registry_exposes_metadata_for_all_actions() {
    let registry = registry();
    let mut names: Vec<String> = registry.metadata().into_iter().map(|m| m.name).collect();
    names.sort();

    assert_eq!(names, vec!["CREATE_WOW_TOKEN", "REQUEST_YIELD_OPPORTUNITY"]);

    for meta in registry.metadata() {
        assert!(!meta.description.is_empty());
        assert!(meta.input_schema.is_object());
    }
}

#[test]
fn registering_the_same_name_twice_keeps_the_last_action() {
    let mut registry = ActionRegistry::new();
    register_all_actions(&mut registry);
    register_all_actions(&mut registry);

    assert_eq!(registry.all().len(), 2);
}
