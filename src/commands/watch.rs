//! Watch command implementation

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::WatchArgs;
use crate::config::ProjectLayout;
use crate::error::{Result, server::failed};
use crate::server;

/// Run watch command, blocking until the server stops
pub fn run(root: Option<PathBuf>, args: WatchArgs) -> Result<()> {
    let layout = ProjectLayout::from_root(root)?;
    let addr = listen_addr(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| failed(format!("failed to start runtime: {e}")))?;
    runtime.block_on(server::serve(layout, addr))
}

fn listen_addr(args: &WatchArgs) -> Result<SocketAddr> {
    let host = args
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|e| failed(format!("invalid host '{}': {e}", args.host)))?;
    Ok(SocketAddr::new(host, args.port))
}
