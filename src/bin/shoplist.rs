use anyhow::Result;
use voice_shopping_list::config::{Config, Mode};
use voice_shopping_list::service::serve;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match &config.mode {
        Mode::Parse { words } => {
            let parser = config.build_parser()?;
            let command = parser.parse(&words.join(" "));
            println!("{}", serde_json::to_string(&command)?);
        }
        Mode::Serve { watch } => serve(&config, *watch).await?,
    }

    Ok(())
}
