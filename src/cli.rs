//! Command-line interface for inspecting workspace documents
//!
//! Supports:
//! - Validating a document and listing what a load would drop or repair
//! - Printing the dashboard/area/widget outline of a document
//! - Rewriting a document in normalized form
//!
//! Widget payloads are carried through untouched (`JsonPassthrough`), so any host's
//! documents can be inspected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::codec::{Decoder, Diagnostic, JsonPassthrough};
use crate::config::DashboardConfig;
use crate::model::{AreaNode, Workspace};
use crate::persist;

/// Inspect and normalize dashboard layout documents
#[derive(Parser, Debug)]
#[command(name = "dashdock", version, about = "Inspect and normalize dashboard layout documents")]
pub struct CliArgs {
    /// Log decoding details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Check a document and report every dropped or repaired piece
    Validate {
        /// Document to check (defaults to the saved workspace)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the dashboards, areas and widgets of a document
    Outline {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Decode a document and write it back in normalized form
    Normalize {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Write compact JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },
}

/// Summary of a successful validation
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub dashboards: usize,
    pub widgets: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Decode `document` without keeping the result
pub fn validate_document(document: &Value) -> Result<Validation> {
    let mut decoder = Decoder::new(&JsonPassthrough);
    let decoded = decoder.decode_workspace(document)?;
    Ok(Validation {
        dashboards: decoded.dashboards.len(),
        widgets: decoded
            .dashboards
            .iter()
            .filter_map(|entry| entry.root.as_ref())
            .map(AreaNode::widget_count)
            .sum(),
        diagnostics: decoder.into_diagnostics(),
    })
}

/// Decode `document` and encode it again
pub fn normalize_document(document: &Value) -> Result<(Value, Vec<Diagnostic>)> {
    let mut workspace = Workspace::new();
    let report = workspace.restore_workspace(document, &JsonPassthrough)?;
    let normalized = workspace
        .serialize_workspace(&JsonPassthrough)
        .to_value()
        .context("Failed to encode workspace")?;
    Ok((normalized, report.diagnostics))
}

/// Render a workspace as an indented outline, one line per dashboard, area and widget
pub fn outline(workspace: &Workspace<Value>) -> String {
    let mut lines = Vec::new();
    for (i, dock) in workspace.docks().iter().enumerate() {
        let marker = if workspace.current() == Some(i) { "*" } else { " " };
        lines.push(format!("{}[{}] {}", marker, i, dock.label));
        match dock.layout() {
            Some(root) => outline_area(root, 1, &mut lines),
            None => lines.push("    (empty)".to_string()),
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn outline_area(node: &AreaNode<Value>, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth * 2);
    match node {
        AreaNode::Tab(tab) => {
            lines.push(format!("{}tabs ({})", indent, tab.len()));
            for (i, widget) in tab.widgets().iter().enumerate() {
                let marker = if tab.current() == Some(i) { ">" } else { " " };
                lines.push(format!("{}  {} {}", indent, marker, widget.title));
            }
        }
        AreaNode::Split(split) => {
            let sizes: Vec<String> = split.sizes().iter().map(|s| format!("{:.2}", s)).collect();
            lines.push(format!(
                "{}split {} [{}]",
                indent,
                split.orientation().as_str(),
                sizes.join(", ")
            ));
            for child in split.children() {
                outline_area(child, depth + 1, lines);
            }
        }
    }
}

/// Run a parsed command. Returns `false` when the document was rejected.
pub fn run(command: CliCommand, config: &DashboardConfig) -> Result<bool> {
    match command {
        CliCommand::Validate { file } => {
            let path = resolve(file)?;
            let document = persist::read_document(&path)?;
            match validate_document(&document) {
                Ok(validation) => {
                    for diagnostic in &validation.diagnostics {
                        println!("warning: {}", diagnostic);
                    }
                    println!(
                        "{}: {} dashboards, {} widgets, {} warnings",
                        path.display(),
                        validation.dashboards,
                        validation.widgets,
                        validation.diagnostics.len()
                    );
                    Ok(true)
                }
                Err(e) => {
                    println!("{}: rejected: {:#}", path.display(), e);
                    Ok(false)
                }
            }
        }

        CliCommand::Outline { file } => {
            let path = resolve(file)?;
            let document = persist::read_document(&path)?;
            let mut workspace = Workspace::new();
            workspace
                .restore_workspace(&document, &JsonPassthrough)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            print!("{}", outline(&workspace));
            Ok(true)
        }

        CliCommand::Normalize {
            file,
            output,
            compact,
        } => {
            let path = resolve(file)?;
            let document = persist::read_document(&path)?;
            let (normalized, diagnostics) = normalize_document(&document)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            for diagnostic in &diagnostics {
                eprintln!("warning: {}", diagnostic);
            }

            let pretty = config.pretty_output && !compact;
            match output {
                Some(out) => persist::write_document(&out, &normalized, pretty)?,
                None => {
                    let text = if pretty {
                        serde_json::to_string_pretty(&normalized)?
                    } else {
                        serde_json::to_string(&normalized)?
                    };
                    println!("{}", text);
                }
            }
            Ok(true)
        }
    }
}

/// An explicit path, or the saved workspace in the config directory
fn resolve(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => crate::config_paths::workspace_file()
            .context("No FILE given and no config directory available"),
    }
}

impl CliArgs {
    /// Path of the document this invocation reads, if given explicitly
    pub fn file(&self) -> Option<&Path> {
        match &self.command {
            CliCommand::Validate { file }
            | CliCommand::Outline { file }
            | CliCommand::Normalize { file, .. } => file.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize_with_output() {
        let args = CliArgs::try_parse_from([
            "dashdock",
            "normalize",
            "in.json",
            "-o",
            "out.json",
            "--verbose",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(args.file(), Some(Path::new("in.json")));
        assert_eq!(
            args.command,
            CliCommand::Normalize {
                file: Some(PathBuf::from("in.json")),
                output: Some(PathBuf::from("out.json")),
                compact: false,
            }
        );
    }

    #[test]
    fn test_validate_without_file_uses_default() {
        let args = CliArgs::try_parse_from(["dashdock", "validate"]).unwrap();
        assert_eq!(args.file(), None);
    }

    #[test]
    fn test_outline_marks_current_dashboard_and_tab() {
        let document = serde_json::json!({
            "type": "application",
            "version": 1,
            "dashboards": [
                {
                    "type": "dashboard",
                    "title": "Main",
                    "config": {
                        "type": "tab-area",
                        "currentIndex": 1,
                        "widgets": [
                            { "title": "A", "configuration": {} },
                            { "title": "B", "configuration": {} }
                        ]
                    }
                },
                { "type": "dashboard", "title": "Empty", "config": null }
            ]
        });
        let mut workspace = Workspace::new();
        workspace
            .restore_workspace(&document, &JsonPassthrough)
            .unwrap();

        assert_eq!(
            outline(&workspace),
            "*[0] Main\n    tabs (2)\n        A\n      > B\n [1] Empty\n    (empty)\n"
        );

        let validation = validate_document(&document).unwrap();
        assert_eq!(validation.dashboards, 2);
        assert_eq!(validation.widgets, 2);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(CliArgs::try_parse_from(["dashdock"]).is_err());
    }
}
