use anyhow::Result;
use tracing::info;

use patzer_repl::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("patzer starting");
    Session::new().run()?;
    Ok(())
}
