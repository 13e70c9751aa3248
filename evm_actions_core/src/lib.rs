pub mod actions;
pub mod error;
pub mod schema;
pub mod wallet;
pub mod wow_actions;
pub mod defi_actions;

pub use actions::{Action, ActionExample, ActionMetadata, ActionRegistry};
pub use error::ActionError;
pub use wallet::{ContractCall, InvocationHandle, Transaction, Wallet};
pub use wow_actions::{create_wow_token, render_token_creation, register_wow_actions, TokenCreation};
pub use defi_actions::register_defi_actions;

/// Convenience helper to register all available actions for an agent.
/// As more domains are added (lending, swaps, NFTs, etc.), extend this
/// function to register their actions as well.
pub fn register_all_actions(registry: &mut ActionRegistry) {
    register_wow_actions(registry);
    register_defi_actions(registry);
}
