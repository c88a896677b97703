use tracing::{error, Level};

use credit_scoring::{
    configuration::{get_configuration, set_configuration, AppState, State},
    error::Error,
    handler::cache_sweeper,
    provider::{Attestation, ChainRpc},
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    set_configuration()?;
    let config = match get_configuration() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let chain_rpc = ChainRpc::new(config.clone())?;
    let attestation = Attestation::new(config.clone())?;

    let state = State::new(config, chain_rpc, attestation);
    let app_state = AppState::new(state);

    let (_, _) = tokio::try_join!(
        server::server_task(&app_state),
        cache_sweeper::sweep_task(app_state.clone()),
    )?;

    Ok(())
}
