//! Typed decodings for the few results the client itself interprets.
//!
//! Everything else stays `serde_json::Value`; decoding it is the caller's
//! business.

use bitcoin::BlockHash;
use serde::Deserialize;

/// Subset of `getblockchaininfo`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: BlockHash,
    #[serde(rename = "initialblockdownload", default)]
    pub initial_block_download: bool,
    pub pruned: bool,
}
