use clap::Parser;
use fedhost_core::{EndpointResolver, HttpRegistryBackend, RemoteLoader};

mod args;
mod shell;

use args::Cli;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            2
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = cli.host_config();
    let table = shell::default_table(&cli.cdn_base)?;

    let resolver = EndpointResolver::from_config(&config, table)?;
    let backend = HttpRegistryBackend::new(config.timeout_secs)?;
    let loader = RemoteLoader::new(&config.name, backend);

    let report = loader.run(&resolver, shell::bootstrap).await;
    shell::print_summary(&report);

    // Remote-load failure alone never fails the process.
    Ok(0)
}
