mod host;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use glance_reducer_core::{DomNode, PageOptions, Role};
use host::{Host, OutputFormat};
use logging::LogFormat;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "glance",
    version,
    about = "Replay GLANCE dashboard actions and print the rendered view"
)]
struct Args {
    /// Actions applied in order, e.g. `toggle_role set_page:posts add_post like_post:1`
    actions: Vec<String>,

    /// File with one action per line (tokens or JSON), applied after positional actions
    #[arg(long, env = "GLANCE_ACTIONS_FILE")]
    actions_file: Option<PathBuf>,

    /// Read actions from stdin and print a snapshot line after each one
    #[arg(long, short)]
    interactive: bool,

    /// Initial role
    #[arg(long, env = "GLANCE_ROLE")]
    role: Option<Role>,

    /// Initial active page
    #[arg(long, env = "GLANCE_PAGE")]
    page: Option<String>,

    /// What to print once all actions are applied
    #[arg(long, short, value_enum, env = "GLANCE_FORMAT", default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Stylesheet URL linked from `--format page` (repeatable)
    #[arg(long = "css")]
    styles: Vec<String>,

    /// Script URL loaded by `--format page` (repeatable)
    #[arg(long = "js")]
    scripts: Vec<String>,

    /// Mount element selector for `--format page`
    #[arg(long, default_value = "#app")]
    mount: String,

    /// Meta description for `--format page`
    #[arg(long)]
    description: Option<String>,

    /// Log filter directive
    #[arg(long, env = "GLANCE_LOG", default_value = "warn")]
    log_level: String,

    #[arg(long, value_enum, env = "GLANCE_LOG_FORMAT", default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn page_options(&self) -> PageOptions {
        let mut opts = PageOptions::new(DomNode::element("div"));
        opts.title = Some("GLANCE".to_string());
        opts.description = self.description.clone();
        opts.styles = self.styles.clone();
        opts.scripts = self.scripts.clone();
        opts.mount_selector = Some(self.mount.clone());
        opts
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_format);

    let mut host = Host::new(args.role, args.page.as_deref());

    for action in &args.actions {
        host.apply(action)?;
    }

    if let Some(path) = &args.actions_file {
        let file = File::open(path)
            .with_context(|| format!("open failed: {}", path.display()))?;
        host.apply_script(BufReader::new(file), &path.display().to_string())?;
    }

    if args.interactive {
        let stdin = io::stdin();
        return host.interactive(stdin.lock(), io::stdout().lock());
    }

    info!(
        actions = host.applied(),
        role = %host.state().role,
        page = %host.state().active_page,
        posts = host.state().posts.len(),
        "rendering"
    );

    let text = host.output(args.format, args.pretty, args.page_options())?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", text).context("write failed: stdout")?;
    Ok(())
}
