mod app;
mod args;
mod commands;
mod config;
mod core;
mod git;
mod util;
mod views;

fn main() -> anyhow::Result<()> {
    app::run()
}
