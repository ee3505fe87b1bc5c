use shopcart_fixtures::cli;
use shopcart_fixtures::env::setup_tracing;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    let (env, command) = cli::Cli::parse_and_convert()?;
    setup_tracing(&env.log_level);

    cli::run_command(&env, command)?;
    Ok(())
}
