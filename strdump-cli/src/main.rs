use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use strdump_cli::{ExtractArgs, run_extract_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the values of a strings.xml file with their line numbers.
    Extract(ExtractArgs),

    /// Print shell completions.
    Completions {
        /// The shell to generate completions for
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::Extract(extract_args) => {
            if let Err(e) = run_extract_command(extract_args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Completions { shell } => {
            let mut command = Args::command();
            clap_complete::generate(shell, &mut command, "strdump", &mut std::io::stdout());
        }
    }
}
