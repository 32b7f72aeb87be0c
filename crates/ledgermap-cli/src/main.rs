use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use ledgermap_cli::{apply, load_requests, plan_all, CliConfig};
use ledgermap_client::GraphQlMappingGateway;
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn request_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("request")
                .long("request")
                .short('r')
                .required(true)
                .value_name("FILE")
                .help("JSON file with one request or an array of requests"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML configuration file"),
        )
}

fn cli() -> Command {
    Command::new("ledgermap")
        .version(ledgermap_cli::VERSION)
        .about("Reconcile accounting integration mappings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(request_args(
            Command::new("plan").about("Print the mutation each request would make"),
        ))
        .subcommand(
            request_args(Command::new("apply").about("Reconcile requests against the billing API"))
                .arg(
                    Arg::new("endpoint")
                        .long("endpoint")
                        .value_name("URL")
                        .help("GraphQL endpoint, overrides the config file"),
                )
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .env("LEDGERMAP_API_KEY")
                        .hide_env_values(true)
                        .help("API key sent as a bearer token"),
                )
                .arg(
                    Arg::new("organization")
                        .long("organization")
                        .value_name("ID")
                        .help("Organization id header value"),
                ),
        )
}

fn load_config(args: &ArgMatches) -> anyhow::Result<CliConfig> {
    match args.get_one::<String>("config") {
        Some(path) => CliConfig::load(path).context("loading configuration"),
        None => Ok(CliConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(matches: &ArgMatches) -> anyhow::Result<bool> {
    match matches.subcommand() {
        Some(("plan", args)) => {
            let config = load_config(args)?;
            let path = args
                .get_one::<String>("request")
                .context("--request is required")?;
            let requests = load_requests(path)?;

            let report = plan_all(&requests, &config.reconcile);
            print_json(&report)?;
            Ok(report.all_succeeded())
        }
        Some(("apply", args)) => {
            let config = load_config(args)?.with_overrides(
                args.get_one::<String>("endpoint").cloned(),
                args.get_one::<String>("api-key").cloned(),
                args.get_one::<String>("organization").cloned(),
            );
            let path = args
                .get_one::<String>("request")
                .context("--request is required")?;
            let requests = load_requests(path)?;

            tracing::info!(
                endpoint = %config.client.endpoint,
                requests = requests.len(),
                "Applying reconciliations"
            );

            let gateway =
                GraphQlMappingGateway::new(config.client).context("building GraphQL client")?;
            let report = apply(gateway, config.reconcile, &requests).await;
            print_json(&report)?;
            Ok(report.all_succeeded())
        }
        _ => anyhow::bail!("unknown command"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match run(&matches).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
