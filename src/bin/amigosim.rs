use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use linprobe::amigonet::{AmigoNet, Session};
use linprobe::config::{Config, TableConfig, ENV_PREFIX};

#[derive(Parser)]
#[command(
    name = "amigosim",
    about = "AmigoNet command simulator over a linear-probing hash table",
    version
)]
struct Cli {
    /// Initial slot count of the user table
    #[arg(long)]
    capacity: Option<usize>,
    /// Load factor at which the table grows, in (0, 1]
    #[arg(long = "load-threshold")]
    load_threshold: Option<f64>,
    /// Capacity multiplier applied on growth, at least 2
    #[arg(long = "resize-factor")]
    resize_factor: Option<usize>,
    /// Print table statistics after the session ends
    #[arg(long)]
    dump: bool,
    /// Print statistics and every slot after the session ends
    #[arg(long = "verbose-dump")]
    verbose_dump: bool,
}

impl Cli {
    // Flags win over LINPROBE_TABLE_*; only the merged result is validated
    fn table_config(&self) -> linprobe::Result<TableConfig> {
        let mut config = TableConfig::read_env(ENV_PREFIX);
        if let Some(capacity) = self.capacity {
            config.initial_capacity = capacity;
        }
        if let Some(threshold) = self.load_threshold {
            config.load_threshold = threshold;
        }
        if let Some(factor) = self.resize_factor {
            config.resize_factor = factor;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    linprobe::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("amigosim failed: {}", err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> linprobe::Result<()> {
    let config = cli.table_config()?;
    log::debug!("Starting session with {:?}", config);

    let mut session = Session::new(AmigoNet::with_config(config)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr().lock();
    session.run(stdin.lock(), &mut out, &mut err)?;

    let network = session.into_network();
    if cli.dump || cli.verbose_dump {
        writeln!(out)?;
        network.dump(&mut out, cli.verbose_dump)?;
        out.flush()?;
    }
    network.destroy();
    Ok(())
}
