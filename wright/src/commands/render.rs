use std::{
    io::{self, Read},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use swiftwright_ast::{Node, Renderer, SourceFile};

use crate::config::Config;

#[derive(Args)]
pub struct RenderCommand {
    /// JSON syntax tree to render (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Indent with tabs regardless of configuration
    #[arg(long)]
    pub tabs: bool,
}

/// Accepted input shapes: a whole source file, or a bare node list.
#[derive(Debug)]
pub(crate) enum Input {
    Nodes(Vec<Node>),
    File(SourceFile),
}

impl Input {
    /// A top-level array is a node list; anything else must be a source file.
    ///
    /// Trees that break a construction rule (a tuple raw value, a declaration
    /// used as a loop condition, ...) are rejected here with serde's message.
    pub(crate) fn parse(json: &str) -> Result<Self> {
        let input = if json.trim_start().starts_with('[') {
            serde_json::from_str(json).map(Self::Nodes)
        } else {
            serde_json::from_str(json).map(Self::File)
        };
        input.wrap_err("input is not a valid syntax tree")
    }
}

impl RenderCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let json = self.read_input()?;
        let input = Input::parse(&json)?;

        let indent = if self.tabs {
            swiftwright_codegen::Indent::Tab
        } else {
            config.render.indent.indent()
        };
        print!("{}", render(&input, &Renderer::new(indent)));
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read '{}'", path.display())),
            _ => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .wrap_err("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

pub(crate) fn render(input: &Input, renderer: &Renderer) -> String {
    match input {
        Input::Nodes(nodes) => renderer.render(nodes),
        Input::File(file) => renderer.render_file(file),
    }
}
