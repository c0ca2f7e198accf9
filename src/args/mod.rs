use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "share-link",
    version,
    about = "Share links to lines of code in a git working copy"
)]
pub struct Cli {
    #[command(flatten, next_help_heading = "Global Options")]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        long,
        global = true,
        value_name = "HOST",
        help = "Forge host the remote points at [default: github.com]"
    )]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "BRANCH",
        help = "Branch used for main-branch links and when detection fails [default: main]"
    )]
    pub default_branch: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "NAME",
        help = "Remote to read the repository URL from [default: origin]"
    )]
    pub remote: Option<String>,
    #[arg(
        short = 'P',
        long,
        global = true,
        help = "Output machine-readable JSON"
    )]
    pub porcelain: bool,
    #[arg(long, global = true, help = "Print debug logs to stderr")]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a link to a file and line range
    Link(LinkArgs),
    /// Show the owner and repository parsed from a remote URL
    Remote(RemoteArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[arg(help = "File inside the repository")]
    pub path: PathBuf,
    #[arg(help = "Line or inclusive range, e.g. 42 or 10-20")]
    pub lines: String,
    #[arg(long, help = "Treat LINES as 0-based editor coordinates")]
    pub zero_based: bool,
    #[arg(
        short = 'm',
        long,
        help = "Link to the default branch instead of the current branch",
        conflicts_with = "branch"
    )]
    pub main_branch: bool,
    #[arg(short = 'b', long, help = "Link to this branch")]
    pub branch: Option<String>,
    #[arg(long, help = "Percent-encode branch name segments")]
    pub encode_branch: bool,
    #[arg(long, help = "Print the link without copying it to the clipboard")]
    pub no_copy: bool,
}

#[derive(Debug, Args)]
pub struct RemoteArgs {
    #[arg(help = "Remote URL to parse (defaults to the configured remote's URL)")]
    pub url: Option<String>,
}

#[derive(Debug, Args)]
#[command(
    after_help = "Installation examples:\n  zsh:        share-link completions zsh > ~/.zsh/completions/_share-link\n  bash:       share-link completions bash > ~/.local/share/bash-completion/completions/share-link\n  fish:       share-link completions fish > ~/.config/fish/completions/share-link.fish\n  powershell: share-link completions powershell > share-link.ps1"
)]
pub struct CompletionsArgs {
    #[arg(help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}
