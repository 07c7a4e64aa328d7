// Typed registry records. No dynamic values here; the transform engine has
// already validated shapes and mapped wire keys to these field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full registry document: header fields plus the network list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworksRegistry {
    /// Reference to the schema file this document conforms to.
    pub schema: String,
    pub description: String,
    pub networks: Vec<Network>,
    pub title: String,
    /// Date and time of the last update.
    pub updated_at: DateTime<Utc>,
    /// Version of the registry.
    pub version: String,
}

/// One network entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Alternative names for the chain, i.e. ethereum, eth, eth-mainnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// API endpoints. `{CUSTOM_API_KEY}` placeholders mark private keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_urls: Option<Vec<ApiUrl>>,
    /// CAIP-2 chain id, i.e. eip155:1.
    pub caip2_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Firehose>,
    /// Display name, i.e. Ethereum Mainnet.
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis: Option<Genesis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_node: Option<GraphNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Established name of the chain, i.e. mainnet, arweave-mainnet.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexer_docs_urls: Option<Vec<IndexerDocsUrl>>,
    /// Whether the chain earns issuance rewards.
    pub issuance_rewards: bool,
    /// Symbol of the native token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_token: Option<String>,
    pub network_type: NetworkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
    /// RPC endpoints. `{CUSTOM_API_KEY}` placeholders mark private keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_urls: Option<Vec<String>>,
    /// Second display name, i.e. Sepolia, Nova.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    /// Provider support for the chain, by service kind.
    pub services: Services,
    /// Short display name, i.e. Ethereum, BNB.
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiUrl {
    pub kind: ApiUrlKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiUrlKind {
    Blockscout,
    Etherscan,
    Ethplorer,
    Other,
    Subscan,
}

/// Firehose block information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firehose {
    /// Block type, i.e. sf.ethereum.type.v2.Block.
    pub block_type: String,
    /// Protobuf definitions on buf.build.
    pub buf_url: String,
    pub bytes_encoding: BytesEncoding,
    /// Whether the chain supports the extended EVM block model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_extended_model: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BytesEncoding {
    Base58,
    Hex,
    #[serde(rename = "0xhex")]
    ZeroXHex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genesis {
    /// Genesis block hash, 0x-prefixed hex or base58.
    pub hash: String,
    /// Height of the genesis or first available block.
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Protocol name in graph-node, i.e. ethereum, near, arweave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Arweave,
    Cosmos,
    Ethereum,
    Near,
    Starknet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web3_icons: Option<Web3Icons>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3Icons {
    pub name: String,
    /// Icon variants; all are available when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerDocsUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub kind: IndexerDocsUrlKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexerDocsUrlKind {
    Firehose,
    Other,
    Rpc,
}

/// Whether the chain is a mainnet, testnet, or devnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    Devnet,
    Mainnet,
    Testnet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    /// Id of the related network, i.e. mainnet, near-mainnet.
    pub network: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    BeaconOf,
    EvmOf,
    ForkedFrom,
    L2Of,
    Other,
    ShardOf,
    TestnetOf,
}

/// Provider support for the chain, keyed by service kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Services {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Vec<ServiceEndpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sps: Option<Vec<ServiceEndpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgraphs: Option<Vec<ServiceEndpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substreams: Option<Vec<ServiceEndpoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[serde(rename = "e&n")]
    EdgeAndNode,
    Graphops,
    Messari,
    Pinax,
    Semiotic,
    Streamingfast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_literals_match_the_schema() {
        assert_eq!(serde_json::to_value(BytesEncoding::ZeroXHex).unwrap(), "0xhex");
        assert_eq!(serde_json::to_value(Provider::EdgeAndNode).unwrap(), "e&n");
        assert_eq!(serde_json::to_value(RelationKind::L2Of).unwrap(), "l2Of");
        assert_eq!(serde_json::to_value(RelationKind::BeaconOf).unwrap(), "beaconOf");
        assert_eq!(serde_json::to_value(NetworkType::Mainnet).unwrap(), "mainnet");
        assert_eq!(serde_json::to_value(IndexerDocsUrlKind::Rpc).unwrap(), "rpc");
    }

    #[test]
    fn unset_options_are_omitted_from_serialization() {
        let services = Services::default();
        assert_eq!(serde_json::to_value(&services).unwrap(), serde_json::json!({}));
    }
}
