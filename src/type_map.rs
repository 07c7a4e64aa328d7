//! Hand-authored type table for the registry document format.
//!
//! Mirrors the registry's published JSON Schema, one entry per named shape.
//! Wire keys are camelCase (plus `$schema`); record keys are the snake_case
//! names the typed structs carry. Built once behind a `Lazy` and read-only
//! from then on.

use once_cell::sync::Lazy;

use crate::schema::{
    array_of, boolean, date, enum_of, number, object, optional, prop, reference, string, TypeMap,
};

/// Root descriptor name for a full registry document.
pub const REGISTRY_ROOT: &str = "NetworksRegistry";

/// Process-wide registry type map.
pub static REGISTRY_TYPES: Lazy<TypeMap> = Lazy::new(registry_type_map);

/// Builds a fresh registry type map. Exposed so tests and embedders can own
/// an independent copy instead of going through the static.
pub fn registry_type_map() -> TypeMap {
    let mut m = TypeMap::new();

    m.define(
        "NetworksRegistry",
        object(vec![
            prop("$schema", "schema", string()),
            prop("description", "description", string()),
            prop("networks", "networks", array_of(reference("NetworkElement"))),
            prop("title", "title", string()),
            prop("updatedAt", "updated_at", date()),
            prop("version", "version", string()),
        ]),
    );

    m.define(
        "NetworkElement",
        object(vec![
            prop("aliases", "aliases", optional(array_of(string()))),
            prop("apiUrls", "api_urls", optional(array_of(reference("APIURL")))),
            prop("caip2Id", "caip2_id", string()),
            prop("docsUrl", "docs_url", optional(string())),
            prop("explorerUrls", "explorer_urls", optional(array_of(string()))),
            prop("firehose", "firehose", optional(reference("Firehose"))),
            prop("fullName", "full_name", string()),
            prop("genesis", "genesis", optional(reference("Genesis"))),
            prop("graphNode", "graph_node", optional(reference("GraphNode"))),
            prop("icon", "icon", optional(reference("Icon"))),
            prop("id", "id", string()),
            prop(
                "indexerDocsUrls",
                "indexer_docs_urls",
                optional(array_of(reference("IndexerDocsURL"))),
            ),
            prop("issuanceRewards", "issuance_rewards", boolean()),
            prop("nativeToken", "native_token", optional(string())),
            prop("networkType", "network_type", reference("NetworkType")),
            prop("relations", "relations", optional(array_of(reference("Relation")))),
            prop("rpcUrls", "rpc_urls", optional(array_of(string()))),
            prop("secondName", "second_name", optional(string())),
            prop("services", "services", reference("Services")),
            prop("shortName", "short_name", string()),
        ]),
    );

    m.define(
        "APIURL",
        object(vec![
            prop("kind", "kind", reference("APIURLKind")),
            prop("url", "url", string()),
        ]),
    );

    m.define(
        "Firehose",
        object(vec![
            prop("blockType", "block_type", string()),
            prop("bufUrl", "buf_url", string()),
            prop("bytesEncoding", "bytes_encoding", reference("BytesEncoding")),
            prop("evmExtendedModel", "evm_extended_model", optional(boolean())),
        ]),
    );

    m.define(
        "Genesis",
        object(vec![
            prop("hash", "hash", string()),
            prop("height", "height", number()),
        ]),
    );

    m.define(
        "GraphNode",
        object(vec![prop("protocol", "protocol", optional(reference("Protocol")))]),
    );

    m.define(
        "Icon",
        object(vec![prop("web3Icons", "web3_icons", optional(reference("Web3Icons")))]),
    );

    m.define(
        "Web3Icons",
        object(vec![
            prop("name", "name", string()),
            prop("variants", "variants", optional(array_of(string()))),
        ]),
    );

    m.define(
        "IndexerDocsURL",
        object(vec![
            prop("hint", "hint", optional(string())),
            prop("kind", "kind", reference("IndexerDocsURLKind")),
            prop("url", "url", string()),
        ]),
    );

    m.define(
        "Relation",
        object(vec![
            prop("kind", "kind", reference("RelationKind")),
            prop("network", "network", string()),
        ]),
    );

    m.define(
        "Services",
        object(vec![
            prop("firehose", "firehose", optional(array_of(reference("FirehoseElement")))),
            prop("sps", "sps", optional(array_of(reference("FirehoseElement")))),
            prop("subgraphs", "subgraphs", optional(array_of(reference("FirehoseElement")))),
            prop("substreams", "substreams", optional(array_of(reference("FirehoseElement")))),
        ]),
    );

    m.define(
        "FirehoseElement",
        object(vec![
            prop("provider", "provider", reference("Provider")),
            prop("url", "url", optional(string())),
        ]),
    );

    m.define("APIURLKind", enum_of(&["blockscout", "etherscan", "ethplorer", "other", "subscan"]));
    m.define("BytesEncoding", enum_of(&["base58", "hex", "0xhex"]));
    m.define("Protocol", enum_of(&["arweave", "cosmos", "ethereum", "near", "starknet"]));
    m.define("IndexerDocsURLKind", enum_of(&["firehose", "other", "rpc"]));
    m.define("NetworkType", enum_of(&["devnet", "mainnet", "testnet"]));
    m.define(
        "RelationKind",
        enum_of(&["beaconOf", "evmOf", "forkedFrom", "l2Of", "other", "shardOf", "testnetOf"]),
    );
    m.define(
        "Provider",
        enum_of(&["e&n", "graphops", "messari", "pinax", "semiotic", "streamingfast"]),
    );

    m
}
