use std::io;

use anyhow::Context;

use larder_cli::{Config, Menu};

fn main() -> anyhow::Result<()> {
    larder_observability::init("warn");

    let config = Config::from_env().context("invalid configuration")?;
    let store = config.build_store().context("failed to build inventory")?;
    tracing::info!(items = store.len(), seed_demo = config.seed_demo, "inventory ready");

    let today = chrono::Local::now().date_naive();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(store, stdin.lock(), stdout.lock(), today).run()
}
