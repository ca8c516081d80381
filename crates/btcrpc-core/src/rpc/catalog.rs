//! Named wrappers for the Bitcoin Core RPC method list.
//!
//! Each entry becomes an async method on [`RpcClient`] that sends its
//! arguments as positional params through [`RpcClient::call_method`]. Only
//! required arguments are typed. Optional arguments are left out so the node
//! applies its own defaults; send them through `call_method` when needed.
//! Params are positional, so an optional argument that precedes a required
//! one stays in the signature (`prioritisetransaction`'s `dummy`, sent as
//! `null` for `None`).
//!
//! Some entries are legacy or fork-specific (`getinfo`, `getaddressutxos`,
//! ...) and only work against nodes that still provide them.

use serde_json::Value;

use crate::error::RpcError;

use super::RpcClient;

macro_rules! rpc_catalog {
    ($($name:ident => $wire:literal($($arg:ident: $ty:ty),*);)*) => {
        /// Wire names of every catalog method, in declaration order.
        pub const METHODS: &[&str] = &[$($wire),*];

        impl RpcClient {
            $(
                #[doc = concat!(
                    "Call `", $wire, "`.\n\n",
                    "See <https://developer.bitcoin.org/reference/rpc/", $wire, ".html>."
                )]
                pub async fn $name(&self, $($arg: $ty),*) -> Result<Value, RpcError> {
                    let params = vec![$(serde_json::to_value(&$arg).map_err(RpcError::Serialize)?),*];
                    self.call_method($wire, params).await
                }
            )*
        }
    };
}

rpc_catalog! {
    abandon_transaction => "abandontransaction"(txid: &str);
    abort_rescan => "abortrescan"();
    add_multisig_address => "addmultisigaddress"(nrequired: u32, keys: Value);
    add_node => "addnode"(node: &str, command: &str);
    analyze_psbt => "analyzepsbt"(psbt: &str);
    backup_wallet => "backupwallet"(destination: &str);
    bump_fee => "bumpfee"(txid: &str);
    clear_banned => "clearbanned"();
    combine_psbt => "combinepsbt"(txs: Value);
    combine_raw_transaction => "combinerawtransaction"(txs: Value);
    convert_to_psbt => "converttopsbt"(hexstring: &str);
    create_multisig => "createmultisig"(nrequired: u32, keys: Value);
    create_psbt => "createpsbt"(inputs: Value, outputs: Value);
    create_raw_transaction => "createrawtransaction"(inputs: Value, outputs: Value);
    create_wallet => "createwallet"(wallet_name: &str);
    decode_psbt => "decodepsbt"(psbt: &str);
    decode_script => "decodescript"(hexstring: &str);
    decode_raw_transaction => "decoderawtransaction"(hexstring: &str);
    derive_addresses => "deriveaddresses"(descriptor: &str);
    disconnect_node => "disconnectnode"();
    dump_priv_key => "dumpprivkey"(address: &str);
    dump_wallet => "dumpwallet"(filename: &str);
    encrypt_wallet => "encryptwallet"(passphrase: &str);
    enumerate_signers => "enumeratesigners"();
    estimate_fee => "estimatefee"();
    estimate_smart_fee => "estimatesmartfee"(conf_target: u32);
    estimate_priority => "estimatepriority"(nblocks: u32);
    generate => "generate"(nblocks: u32);
    generate_block => "generateblock"(output: &str, transactions: Value);
    generate_to_address => "generatetoaddress"(nblocks: u32, address: &str);
    generate_to_descriptor => "generatetodescriptor"(num_blocks: u32, descriptor: &str);
    get_account => "getaccount"();
    get_account_address => "getaccountaddress"(account: &str);
    get_added_node_info => "getaddednodeinfo"();
    get_address_mempool => "getaddressmempool"(addresses: Value);
    get_address_utxos => "getaddressutxos"(addresses: Value);
    get_address_balance => "getaddressbalance"(addresses: Value);
    get_address_deltas => "getaddressdeltas"(addresses: Value);
    get_addresses_by_label => "getaddressesbylabel"(label: &str);
    get_address_info => "getaddressinfo"(address: &str);
    get_address_txids => "getaddresstxids"(addresses: Value);
    get_addresses_by_account => "getaddressesbyaccount"();
    get_balance => "getbalance"();
    get_balances => "getbalances"();
    get_best_block_hash => "getbestblockhash"();
    get_block_deltas => "getblockdeltas"(blockhash: &str);
    get_block => "getblock"(blockhash: &str);
    get_blockchain_info => "getblockchaininfo"();
    get_block_count => "getblockcount"();
    get_block_filter => "getblockfilter"(blockhash: &str);
    get_block_hashes => "getblockhashes"(high: u64, low: u64, options: Value);
    get_block_hash => "getblockhash"(height: u64);
    get_block_header => "getblockheader"(blockhash: &str);
    get_block_number => "getblocknumber"();
    get_block_stats => "getblockstats"(hash_or_height: &str);
    get_block_template => "getblocktemplate"();
    get_connection_count => "getconnectioncount"();
    get_chain_tips => "getchaintips"();
    get_chain_tx_stats => "getchaintxstats"();
    get_descriptor_info => "getdescriptorinfo"(descriptor: &str);
    get_difficulty => "getdifficulty"();
    get_generate => "getgenerate"();
    get_hashes_per_sec => "gethashespersec"();
    get_index_info => "getindexinfo"();
    get_info => "getinfo"();
    get_memory_info => "getmemoryinfo"();
    get_memory_pool => "getmemorypool"();
    get_mempool_ancestors => "getmempoolancestors"(txid: &str);
    get_mempool_descendants => "getmempooldescendants"(txid: &str);
    get_mempool_entry => "getmempoolentry"(txid: &str);
    get_mempool_info => "getmempoolinfo"();
    get_mining_info => "getmininginfo"();
    get_net_totals => "getnettotals"();
    get_network_hash_ps => "getnetworkhashps"();
    get_network_info => "getnetworkinfo"();
    get_new_address => "getnewaddress"();
    get_node_addresses => "getnodeaddresses"();
    get_peer_info => "getpeerinfo"();
    get_raw_change_address => "getrawchangeaddress"();
    get_raw_mempool => "getrawmempool"();
    get_raw_transaction => "getrawtransaction"(txid: &str);
    get_received_by_account => "getreceivedbyaccount"(account: &str);
    get_received_by_address => "getreceivedbyaddress"(address: &str);
    get_received_by_label => "getreceivedbylabel"(label: &str);
    get_rpc_info => "getrpcinfo"();
    get_spent_info => "getspentinfo"(outpoint: Value);
    get_transaction => "gettransaction"(txid: &str);
    get_tx_out => "gettxout"(txid: &str, n: u32);
    get_tx_out_proof => "gettxoutproof"(txids: Value);
    get_tx_out_set_info => "gettxoutsetinfo"();
    get_unconfirmed_balance => "getunconfirmedbalance"();
    get_wallet_info => "getwalletinfo"();
    get_work => "getwork"();
    get_zmq_notifications => "getzmqnotifications"();
    finalize_psbt => "finalizepsbt"(psbt: &str);
    fund_raw_transaction => "fundrawtransaction"(hexstring: &str);
    help => "help"();
    import_address => "importaddress"(address: &str);
    import_descriptors => "importdescriptors"(requests: Value);
    import_multi => "importmulti"(requests: Value);
    import_priv_key => "importprivkey"(privkey: &str);
    import_pruned_funds => "importprunedfunds"(rawtransaction: &str, txoutproof: &str);
    import_pub_key => "importpubkey"(pubkey: &str);
    import_wallet => "importwallet"(filename: &str);
    invalidate_block => "invalidateblock"(blockhash: &str);
    join_psbts => "joinpsbts"(txs: Value);
    key_pool_refill => "keypoolrefill"();
    list_accounts => "listaccounts"();
    list_address_groupings => "listaddressgroupings"();
    list_banned => "listbanned"();
    list_descriptors => "listdescriptors"();
    list_labels => "listlabels"();
    list_lock_unspent => "listlockunspent"();
    list_received_by_account => "listreceivedbyaccount"();
    list_received_by_address => "listreceivedbyaddress"();
    list_received_by_label => "listreceivedbylabel"();
    list_since_block => "listsinceblock"();
    list_transactions => "listtransactions"();
    list_unspent => "listunspent"();
    list_wallet_dir => "listwalletdir"();
    list_wallets => "listwallets"();
    load_wallet => "loadwallet"(filename: &str);
    lock_unspent => "lockunspent"(unlock: bool);
    logging => "logging"();
    move_funds => "move"(from_account: &str, to_account: &str, amount: f64);
    ping => "ping"();
    precious_block => "preciousblock"(blockhash: &str);
    prioritise_transaction => "prioritisetransaction"(txid: &str, dummy: Option<f64>, fee_delta: i64);
    prune_blockchain => "pruneblockchain"(height: u64);
    psbt_bump_fee => "psbtbumpfee"(txid: &str);
    remove_pruned_funds => "removeprunedfunds"(txid: &str);
    rescan_blockchain => "rescanblockchain"();
    save_mempool => "savemempool"();
    send => "send"(outputs: Value);
    set_hd_seed => "sethdseed"();
    set_label => "setlabel"(address: &str, label: &str);
    set_wallet_flag => "setwalletflag"(flag: &str);
    scan_tx_out_set => "scantxoutset"(action: &str);
    send_from => "sendfrom"(from_account: &str, to_address: &str, amount: f64);
    send_many => "sendmany"(dummy: &str, amounts: Value);
    send_raw_transaction => "sendrawtransaction"(hexstring: &str);
    send_to_address => "sendtoaddress"(address: &str, amount: f64);
    set_account => "setaccount"(address: &str, account: &str);
    set_ban => "setban"(subnet: &str, command: &str);
    set_network_active => "setnetworkactive"(state: bool);
    set_generate => "setgenerate"(generate: bool);
    set_tx_fee => "settxfee"(amount: f64);
    sign_message => "signmessage"(address: &str, message: &str);
    sign_message_with_priv_key => "signmessagewithprivkey"(privkey: &str, message: &str);
    sign_raw_transaction => "signrawtransaction"(hexstring: &str);
    sign_raw_transaction_with_key => "signrawtransactionwithkey"(hexstring: &str, privkeys: Value);
    sign_raw_transaction_with_wallet => "signrawtransactionwithwallet"(hexstring: &str);
    stop => "stop"();
    submit_block => "submitblock"(hexdata: &str);
    submit_header => "submitheader"(hexdata: &str);
    test_mempool_accept => "testmempoolaccept"(rawtxs: Value);
    unload_wallet => "unloadwallet"();
    upgrade_wallet => "upgradewallet"();
    uptime => "uptime"();
    utxo_update_psbt => "utxoupdatepsbt"(psbt: &str);
    validate_address => "validateaddress"(address: &str);
    verify_chain => "verifychain"();
    verify_message => "verifymessage"(address: &str, signature: &str, message: &str);
    verify_tx_out_proof => "verifytxoutproof"(proof: &str);
    wallet_create_funded_psbt => "walletcreatefundedpsbt"(inputs: Value, outputs: Value);
    wallet_display_address => "walletdisplayaddress"(address: &str);
    wallet_lock => "walletlock"();
    wallet_passphrase => "walletpassphrase"(passphrase: &str, timeout: u64);
    wallet_passphrase_change => "walletpassphrasechange"(oldpassphrase: &str, newpassphrase: &str);
    wallet_process_psbt => "walletprocesspsbt"(psbt: &str);
}

/// Whether `method` (any casing) is in the catalog.
pub fn is_known_method(method: &str) -> bool {
    let method = method.to_lowercase();
    METHODS.iter().any(|known| *known == method)
}
