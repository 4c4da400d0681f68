use {
    avs_operator_registration::{
        generate_registration, Address, HashPoint, HashPointCheck, HashPointSource, KeyMaterial,
        RegistrationError, StaticHashPointSource,
    },
    clap::{error::ErrorKind, CommandFactory, Parser},
    config::{ContextConfig, DeployOutput, FrameworkConfig},
    log::*,
    rpc::JsonRpcHashPointSource,
    std::{path::PathBuf, process::exit, time::Duration},
    url::Url,
};

mod config;
mod rpc;

#[derive(Parser)]
#[command(
    name = "generate-operator-registration-data",
    about = "Generate BLS registration data for an AVS operator",
    version
)]
struct Cli {
    /// Name of the context file, without the `.yaml` extension
    context: String,

    /// Operator address (20 bytes, hex)
    operator_address: Address,

    /// BLS private key as a base-10 integer
    bls_private_key: String,

    /// Directory holding the context files
    #[arg(long, default_value = "../../config/contexts")]
    contexts_dir: PathBuf,

    /// Framework config listing the operator sockets
    #[arg(long, default_value = "../framework.yaml")]
    framework_config: PathBuf,

    /// AVS deployment output holding the registrar address
    #[arg(
        long,
        default_value = "../../contracts/script/local/output/deploy_avs_l1_output.json"
    )]
    deploy_output: PathBuf,

    /// Overrides the RPC URL from the context file
    #[arg(long)]
    rpc_url: Option<Url>,

    /// Overrides the socket from the framework config
    #[arg(long)]
    socket: Option<String>,

    /// Hash point X coordinate (decimal); skips the RPC lookup
    #[arg(long, requires = "hash_point_y")]
    hash_point_x: Option<String>,

    /// Hash point Y coordinate (decimal); skips the RPC lookup
    #[arg(long, requires = "hash_point_x")]
    hash_point_y: Option<String>,

    /// Sign the hash point without checking that it lies on the curve
    #[arg(long)]
    skip_hash_point_check: bool,

    /// Timeout for the RPC request, in seconds
    #[arg(long, default_value_t = 30)]
    rpc_timeout_secs: u64,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // usage and help go to stdout along with the rest of the output
            println!("{}", err.render());
            if err.kind() == ErrorKind::ValueValidation {
                println!("{}", Cli::command().render_usage());
            }
            exit(err.exit_code());
        }
    };

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(cli) {
        error!("{err}");
        println!("{err}");
        if matches!(err, RegistrationError::InvalidKey) {
            println!("{}", Cli::command().render_usage());
        }
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RegistrationError> {
    let key: KeyMaterial = cli.bls_private_key.parse()?;
    let operator = cli.operator_address;

    let context = ContextConfig::load(&cli.contexts_dir, &cli.context)?;
    let rpc_url = cli.rpc_url.unwrap_or(context.rpc_url);

    let socket = match cli.socket {
        Some(socket) => socket,
        None => FrameworkConfig::load(&cli.framework_config)?
            .socket_for(&operator)?
            .to_string(),
    };

    let registry = DeployOutput::load(&cli.deploy_output)?.task_avs_registrar(&cli.deploy_output)?;
    debug!("task AVS registrar is {registry}");

    println!(
        "Using Chain ID: {} and RPC URL: {}",
        context.chain_id, rpc_url
    );

    let source: Box<dyn HashPointSource> = match (cli.hash_point_x, cli.hash_point_y) {
        (Some(x), Some(y)) => {
            info!("using the hash point given on the command line");
            Box::new(StaticHashPointSource(HashPoint::from_decimal(&x, &y)?))
        }
        _ => Box::new(JsonRpcHashPointSource::new(
            rpc_url,
            Duration::from_secs(cli.rpc_timeout_secs),
        )?),
    };

    let check = if cli.skip_hash_point_check {
        HashPointCheck::Skip
    } else {
        HashPointCheck::OnCurve
    };

    let artifacts =
        generate_registration(source.as_ref(), &registry, &operator, &key, &socket, check)?;
    let params = artifacts.params;

    println!(
        "Hash point: X=[{}], Y=[{}]",
        artifacts.hash_point.x, artifacts.hash_point.y
    );
    println!("CONTEXT: {}", cli.context);
    println!("TASK_AVS_REGISTRAR: {registry}");
    println!("OPERATOR: {operator}");
    println!("SOCKET: {socket}");
    println!(
        "PUBKEY_REGISTRATION_PARAMS: {}",
        params.pubkey_registration_params
    );
    println!();
    println!("REGISTER_PARAMS_DATA: {}", params.register_params_data);

    Ok(())
}
