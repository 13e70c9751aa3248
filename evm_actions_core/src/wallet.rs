use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// One contract call as handed to the wallet SDK: target address, method
/// name, the ABI fragment describing the method, and a JSON argument map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract_address: String,
    pub method: String,
    pub abi: Value,
    pub args: Value,
}

/// Confirmed transaction record returned by the wallet SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_hash: String,
    pub transaction_link: String,
}

/// A submitted contract call that has not yet been confirmed.
#[async_trait]
pub trait InvocationHandle: Send + Sync {
    /// Wait for on-chain confirmation, yielding the transaction record.
    /// Timeout semantics are the SDK's own; the core imposes none.
    async fn wait(self: Box<Self>) -> anyhow::Result<Transaction>;
}

/// trait for the wallet capability actions depend on.
/// allows for flexible wallet implementations, from local signers to remote
/// custodial wallets; the concrete SDK owns signing, gas, and thread-safety.
#[async_trait]
pub trait Wallet: Send + Sync + Debug {
    /// Network the wallet operates on, e.g. "base-mainnet".
    fn network_id(&self) -> &str;

    /// The wallet's default address identifier.
    fn default_address(&self) -> &str;

    /// Submit a contract call, returning a handle to await confirmation.
    async fn invoke_contract(&self, call: ContractCall)
        -> anyhow::Result<Box<dyn InvocationHandle>>;
}
