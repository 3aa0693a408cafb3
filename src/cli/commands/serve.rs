use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::{init_tracing, run_server};

/// Handle the `serve` command: run the HTTP server until shutdown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(b) = bind {
            cfg.bind = b.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        init_tracing();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(run_server(&cfg.database, &cfg.listen_addr()))?;
    }
    Ok(())
}
