use liftprobe::cli::{Cli, Commands, OutputFormat};
use liftprobe::probe::adapters::{cordova, native_script, react_native};
use liftprobe::probe::{Host, Probe, Provisioning};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Prints whatever a host callback receives.
struct StdoutContext;

impl cordova::CallbackContext for StdoutContext {
    fn success(&mut self, message: &str) {
        println!("success({message:?})");
    }

    fn error(&mut self, message: &str) {
        println!("error({message:?})");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { a, c, host } => run_check(a, c, host.into())?,
        Commands::Provision { app_id, format } => run_provision(&app_id, format)?,
    }

    Ok(())
}

fn run_check(a: i32, c: i32, host: Host) -> anyhow::Result<()> {
    let probe = Probe::compiled();
    debug!(%host, "running compiled probe");

    match host {
        Host::Cordova => {
            let args = [json!(a), json!(c)];
            cordova::execute(probe, probe.function_name(), &args, &mut StdoutContext)?;
        }
        Host::ReactNative => react_native::invoke(probe, a, c, |token, witness, derived| {
            println!("callback({token:?}, {witness:?}, {derived:?})");
        }),
        Host::NativeScript => println!("{}", native_script::call(probe, a, c)),
    }

    Ok(())
}

fn run_provision(app_id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let record = Provisioning::generate(app_id, &mut rand::rng());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Env => {
            for (name, value) in record.env_vars() {
                println!("export {name}={value}");
            }
            println!(
                "# host plugin: class={} plugin={}",
                record.identifiers.class_name, record.identifiers.plugin_name
            );
            println!(
                "# script inputs: a={} c={}",
                record.script_inputs.a, record.script_inputs.c
            );
        }
    }

    info!(app_id, "provisioning record written to stdout");
    Ok(())
}
