use clap::Args;
use geoquiz_core::Config;

use crate::server;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (defaults to server.bind from the config file)
    #[arg(long)]
    pub bind: Option<String>,
}

pub fn run(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    super::runtime()?.block_on(server::serve(config, &bind))
}
