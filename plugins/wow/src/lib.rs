// plugins/wow/src/lib.rs
//
// Constants and helpers for the Zora Wow ERC20 memecoin factory on Base.

use serde_json::{json, Value};

/// Metadata URI applied to every token deployed through the factory.
pub const GENERIC_TOKEN_METADATA_URI: &str =
    "ipfs://QmY1GqprFYvojCcUEKgqHeDj9uhZD9jmYGrQTfA9vAE78J";

/// Referrer used when the deployer has no platform referrer.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Wow factory deployments, keyed by CDP network id.
const WOW_FACTORY_ADDRESSES: &[(&str, &str)] = &[
    ("base-sepolia", "0x04870e22fa217Cb16aa00501D7D5253B8838C1eA"),
    ("base-mainnet", "0x997020E5F59cCB79C74D527Be492Cc610CB9fA2B"),
];

/// Look up the Wow factory address for a network id.
///
/// Returns `None` for networks the factory is not deployed on, so callers
/// can refuse the operation before any contract call is attempted.
pub fn factory_address(network_id: &str) -> Option<&'static str> {
    WOW_FACTORY_ADDRESSES
        .iter()
        .find(|(net, _)| *net == network_id)
        .map(|(_, addr)| *addr)
}

/// ABI fragment for the factory's `deploy` entrypoint.
pub fn wow_factory_abi() -> Value {
    json!([
        {
            "type": "function",
            "name": "deploy",
            "stateMutability": "payable",
            "inputs": [
                { "name": "_tokenCreator", "type": "address" },
                { "name": "_platformReferrer", "type": "address" },
                { "name": "_tokenURI", "type": "string" },
                { "name": "_name", "type": "string" },
                { "name": "_symbol", "type": "string" }
            ],
            "outputs": [
                { "name": "", "type": "address" }
            ]
        }
    ])
}

/// Build the argument map for a `deploy` call.
pub fn deploy_args(token_creator: &str, name: &str, symbol: &str) -> Value {
    json!({
        "_tokenCreator": token_creator,
        "_platformReferrer": ZERO_ADDRESS,
        "_tokenURI": GENERIC_TOKEN_METADATA_URI,
        "_name": name,
        "_symbol": symbol,
    })
}
