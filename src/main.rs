#![warn(clippy::all)]
use ascale::config::Config;
use ascale::prelude::*;
use ascale::AutoScalingClient;
use clap::{CommandFactory, Parser};
use commands::{Commands, Ctx, Output};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Profile in ~/.aws/credentials or ~/.aws/config
    #[arg(long, global = true)]
    profile: Option<String>,
    /// Region, wins over AWS_REGION and the profile's region
    #[arg(long, global = true)]
    region: Option<String>,
    #[arg(short, long, global = true, value_enum, default_value_t)]
    output: Output,
    #[command(subcommand)]
    command: Commands,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ASCALE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: Args) -> Result<()> {
    let mut cfg = Config::load().context("Can't load config")?;
    match args.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Args::command(), "ascale", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Config { reset, clear_cache } => {
            if reset {
                Config::reset()?;
                p!("Configuration reset");
            } else if clear_cache {
                Config::clear_cache()?;
                p!("Credentials cache cleared");
            } else {
                p!("{}", serde_json::to_string_pretty(&cfg)?);
                p!("{}", Config::config_path()?.display());
            }
            return Ok(());
        }
        _ => (),
    }

    if let Some(profile) = args.profile {
        cfg.profile = profile;
    }
    if args.region.is_some() {
        cfg.region = args.region;
    }
    let client = AutoScalingClient::from_config(&cfg)?;
    let ctx = Ctx { client: &client, output: args.output, page_size: cfg.page_size };
    match args.command {
        Commands::Groups { names } => Commands::groups(&names, &ctx),
        Commands::Instances { instance_ids } => Commands::instances(&instance_ids, &ctx),
        Commands::Activities { group, limit } => {
            Commands::activities(group.as_deref(), limit, &ctx)
        }
        Commands::Policies { group } => Commands::policies(group.as_deref(), &ctx),
        Commands::Scheduled { group } => Commands::scheduled(group.as_deref(), &ctx),
        Commands::Tags { filters } => Commands::tags(&filters, &ctx),
        Commands::Hooks { group } => Commands::hooks(&group, &ctx),
        Commands::Limits => Commands::limits(&ctx),
        Commands::SetCapacity { group, desired, honor_cooldown } => {
            Commands::set_capacity(&group, desired, honor_cooldown, &ctx)
        }
        Commands::Suspend { group, processes } => Commands::suspend(&group, &processes, &ctx),
        Commands::Resume { group, processes } => Commands::resume(&group, &processes, &ctx),
        Commands::Standby { group, instance_ids, exit, keep_capacity } => {
            Commands::standby(&group, &instance_ids, exit, keep_capacity, &ctx)
        }
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let _guard = stopwatch("ascale");
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "ascale", "set-capacity", "web", "3", "--honor-cooldown", "--region", "eu-west-1",
            "-o", "json",
        ])
        .unwrap();
        assert_eq!(args.region.as_deref(), Some("eu-west-1"));
        assert_eq!(args.output, Output::Json);
        match args.command {
            Commands::SetCapacity { group, desired, honor_cooldown } => {
                assert_eq!((group.as_str(), desired, honor_cooldown), ("web", 3, true));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn standby_needs_instances() {
        assert!(Args::try_parse_from(["ascale", "standby", "web"]).is_err());
        let args = Args::try_parse_from(["ascale", "tags", "-f", "key=Name"]).unwrap();
        match args.command {
            Commands::Tags { filters } => {
                assert_eq!(filters, [("key".to_string(), "Name".to_string())])
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
