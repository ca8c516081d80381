mod cli;

use std::error::Error as _;

use btcrpc_core::rpc::catalog::{is_known_method, METHODS};
use btcrpc_core::{RpcClient, RpcError};
use clap::Parser;
use eyre::{eyre, WrapErr};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    if args.list_methods {
        for method in METHODS {
            println!("{method}");
        }
        return Ok(());
    }

    let method = args
        .method
        .as_deref()
        .ok_or_else(|| eyre!("no method given"))?;
    if !is_known_method(method) {
        tracing::warn!(method, "method is not in the built-in catalog; sending it anyway");
    }

    let options = args
        .connection_options()
        .wrap_err("while resolving RPC connection settings")?;
    let client = RpcClient::new(options);
    tracing::debug!(endpoint = client.endpoint(), "using RPC endpoint");

    let params = args.json_params();
    let outcome = if args.raw {
        client.call_method(method, params).await
    } else {
        client.call_result(method, params).await
    };
    let value =
        outcome.map_err(|err| eyre!(format_rpc_error(method, client.endpoint(), &err)))?;

    print_value(&value)
}

fn print_value(value: &serde_json::Value) -> eyre::Result<()> {
    match value {
        serde_json::Value::String(s) => println!("{s}"),
        serde_json::Value::Null => {}
        other => println!(
            "{}",
            serde_json::to_string_pretty(other).context("format response")?
        ),
    }
    Ok(())
}

fn format_rpc_error(method: &str, endpoint: &str, err: &RpcError) -> String {
    let mut lines = vec![
        format!("`{method}` against `{endpoint}` failed"),
        err.to_string(),
    ];
    if let Some(cause) = err.source() {
        lines.push(format!("caused by: {cause}"));
    }
    if let RpcError::Request { body, .. } = err {
        if !body.is_empty() {
            lines.push(format!("response body: {body}"));
        }
    }

    let hint = match err {
        RpcError::Authentication | RpcError::Authorization => Some(
            "hint: verify --rpc-user/--rpc-pass, the URL credentials, or --rpc-cookie-file",
        ),
        RpcError::Overload => {
            Some("hint: the node's work queue is full; retry later or raise -rpcworkqueue")
        }
        RpcError::Transport(_) => {
            Some("hint: verify the node is running and reachable at this host and port")
        }
        RpcError::Request { status: 404, .. } => {
            Some("hint: the endpoint path is invalid; RPC is served from the root path")
        }
        _ => None,
    };
    if let Some(hint) = hint {
        lines.push(hint.to_owned());
    }

    lines.join("\n")
}
