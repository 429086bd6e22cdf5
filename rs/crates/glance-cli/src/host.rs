//! Host binding: owns the single `ViewState`, feeds it actions and applies
//! the resulting snapshots to an output stream.

use anyhow::{Context, Result};
use clap::ValueEnum;
use glance_reducer_core::{
    parse_action, process, reduce, render, render_html, render_page, Page, PageOptions, Role,
    ViewState,
};
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// DOM snapshot JSON
    Json,
    /// HTML fragment of the view
    Html,
    /// Complete HTML document
    Page,
    /// Serialized view state
    State,
}

pub struct Host {
    state: ViewState,
    applied: usize,
}

impl Host {
    pub fn new(role: Option<Role>, page: Option<&str>) -> Self {
        let mut state = ViewState::new();
        if let Some(role) = role {
            state.role = role;
        }
        if let Some(page) = page {
            state.set_active_page(Page::parse(page));
        }
        Self { state, applied: 0 }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Parse and apply one action. Unparseable input is an error here; the
    /// interactive loop is lenient instead.
    pub fn apply(&mut self, input: &str) -> Result<()> {
        let action = parse_action(input).with_context(|| format!("bad action '{}'", input.trim()))?;
        debug!(?action, "applying");
        self.state = reduce(std::mem::take(&mut self.state), &action);
        self.applied += 1;
        Ok(())
    }

    /// Apply one action per line; blank lines and `#` comments are skipped.
    pub fn apply_script<R: BufRead>(&mut self, reader: R, origin: &str) -> Result<()> {
        for (n, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read failed: {}", origin))?;
            if is_skippable(&line) {
                continue;
            }
            self.apply(&line)
                .with_context(|| format!("{}:{}", origin, n + 1))?;
        }
        Ok(())
    }

    /// Emit the current snapshot, then one compact snapshot line per input
    /// line, until EOF.
    pub fn interactive<R: BufRead, W: Write>(&mut self, reader: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", render(&self.state).to_json()?)?;
        out.flush()?;

        for line in reader.lines() {
            let line = line.context("read failed: stdin")?;
            if is_skippable(&line) {
                continue;
            }
            let (next, snapshot) = process(std::mem::take(&mut self.state), &line);
            self.state = next;
            self.applied += 1;
            writeln!(out, "{}", snapshot.to_json()?)?;
            out.flush()?;
        }
        info!(actions = self.applied, "input closed");
        Ok(())
    }

    pub fn output(&self, format: OutputFormat, pretty: bool, page: PageOptions) -> Result<String> {
        let text = match format {
            OutputFormat::Json => {
                let snap = render(&self.state);
                if pretty { snap.to_json_pretty()? } else { snap.to_json()? }
            }
            OutputFormat::Html => render_html(&self.state),
            OutputFormat::Page => render_page(&self.state, page),
            OutputFormat::State => {
                if pretty {
                    serde_json::to_string_pretty(&self.state)?
                } else {
                    serde_json::to_string(&self.state)?
                }
            }
        };
        Ok(text)
    }
}

fn is_skippable(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#')
}
