mod options;

use std::io;
use std::process;

use anyhow::Result;
use cmdline_core::{CmdlineError, CommandLineUtils};
use tracing::{debug, info};

use options::{
    build_command_line, switch_enabled, ConnectOptions, CMD_DEBUG, CMD_HELP, CMD_JSON_HELP,
};

fn main() {
    // Skip the program path; only flags and values are scanned
    let arguments: Vec<String> = std::env::args().skip(1).collect();

    let cmd_utils = build_command_line(&arguments, |arguments| {
        init_tracing(switch_enabled(arguments, CMD_DEBUG));
    });

    if let Err(err) = run(&cmd_utils) {
        match err.downcast_ref::<CmdlineError>() {
            Some(cmdline_err) if cmdline_err.is_fatal() => {
                eprintln!("{}", cmdline_err);
                // The listing is best effort once we are already failing
                let _ = cmd_utils.write_help(&mut io::stderr());
            }
            _ => eprintln!("Error: {:#}", err),
        }
        process::exit(1);
    }
}

fn run(cmd_utils: &CommandLineUtils) -> Result<()> {
    if switch_enabled(cmd_utils.arguments(), CMD_HELP) {
        cmd_utils.print_help();
        return Ok(());
    }

    if switch_enabled(cmd_utils.arguments(), CMD_JSON_HELP) {
        println!("{}", serde_json::to_string_pretty(&cmd_utils.to_json()?)?);
        return Ok(());
    }

    let options = ConnectOptions::from_command_line(cmd_utils)?;
    debug!(?options, "resolved connect options");

    info!(
        endpoint = %options.endpoint,
        port = options.port,
        client_id = %options.client_id,
        "connecting"
    );
    println!(
        "Connecting to {}:{} with client ID '{}'",
        options.endpoint, options.port, options.client_id
    );
    println!("  cert: {}", options.cert_path.display());
    println!("  key:  {}", options.key_path.display());
    match &options.ca_path {
        Some(ca_path) => println!("  ca:   {}", ca_path.display()),
        None => println!("  ca:   system trust store"),
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    // RUST_LOG wins over the --debug switch when set
    let default_filter = if debug {
        "basic_connect=debug,cmdline_core=debug"
    } else {
        "basic_connect=info,cmdline_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
