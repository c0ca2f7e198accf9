use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands, GlobalArgs};
use crate::commands;
use crate::config::{Overrides, Settings};
use crate::git::{Git, GitConfig};

pub struct AppContext {
    cli: Cli,
    git: Option<Git>,
    settings: Settings,
}

impl AppContext {
    fn build(cli: Cli) -> Result<Self> {
        let overrides = overrides_from(&cli);
        let git = match &cli.command {
            Commands::Completions(_) => None,
            // An explicit URL can be parsed outside any repository.
            Commands::Remote(args) if args.url.is_some() => Git::discover().ok(),
            _ => Some(Git::discover()?),
        };
        let settings = match (&cli.command, &git) {
            (Commands::Completions(_), _) => Settings::default(),
            (_, Some(git)) => Settings::resolve(&overrides, &git.config())?,
            // Global and system config still apply outside a repository.
            (_, None) => Settings::resolve(&overrides, &GitConfig::outside_repository())?,
        };

        Ok(Self { cli, git, settings })
    }

    fn git(&self) -> Result<&Git> {
        self.git
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("not inside a git repository"))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let ctx = AppContext::build(cli)?;
    dispatch(&ctx)
}

fn init_tracing(global: &GlobalArgs) {
    let filter = if global.debug && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn overrides_from(cli: &Cli) -> Overrides {
    let encode_branch = match &cli.command {
        Commands::Link(args) => args.encode_branch,
        _ => false,
    };
    Overrides {
        host: cli.global.base_url.clone(),
        default_branch: cli.global.default_branch.clone(),
        remote: cli.global.remote.clone(),
        encode_branch,
    }
}

fn dispatch(ctx: &AppContext) -> Result<()> {
    match &ctx.cli.command {
        Commands::Link(args) => {
            commands::link::run(ctx.git()?, &ctx.settings, args, ctx.cli.global.porcelain)
        }
        Commands::Remote(args) => commands::remote::run(
            ctx.git.as_ref(),
            &ctx.settings,
            args,
            ctx.cli.global.porcelain,
        ),
        Commands::Completions(args) => {
            commands::completions::run(args.shell);
            Ok(())
        }
    }
}
