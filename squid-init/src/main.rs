use std::env;
use std::process;

use clap::Parser;

use squid_init::config::{self, Overrides, ResolvedConfig};
use squid_init::exit_codes;
use squid_init::launch;
use squid_init::logging;

/// Launcher for the squid caching proxy daemon.
///
/// Ensures the cache directory exists, initializes the cache once
/// (`squid -N -z`), then replaces itself with the daemon (`squid -N`).
#[derive(Debug, Parser)]
#[command(name = "squid-init", version)]
struct Cli {
    /// Path to the squid binary (falls back to $SQUID_BIN).
    #[arg(short = 'b', long = "bin", value_name = "PATH")]
    bin: Option<String>,

    /// Path to the squid config (falls back to $SQUID_CONF).
    #[arg(short = 'f', long = "conf", value_name = "PATH")]
    conf: Option<String>,

    /// Path to the cache dir (falls back to $SQUID_CACHE_DIR).
    #[arg(short = 'c', long = "cache", value_name = "PATH")]
    cache: Option<String>,
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Bad flags exit 1 instead of clap's default 2; help and version
        // stay at 0.
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    let overrides = Overrides {
        bin: cli.bin,
        conf: cli.conf,
        cache_dir: cli.cache,
    };
    let cfg = config::resolve(&overrides, |name| env::var(name).ok());
    announce(&cfg);

    match launch::launch(&cfg) {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    }
}

fn announce(cfg: &ResolvedConfig) {
    eprintln!("squid-init: Configuration:");
    eprintln!("  Binary: {}", cfg.bin.display());
    eprintln!("  Config: {}", cfg.conf.display());
    eprintln!("  Cache : {}", cfg.cache_dir.display());
}
