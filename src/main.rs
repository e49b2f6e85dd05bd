use anyhow::Result;
use repo_pack::{config::Config, interactive, pipeline::Pipeline};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repo_pack=info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_cli()?;
    if config.interactive {
        interactive::apply_prompts(&mut config)?;
    }
    Pipeline::new(config)?.run()
}
