//! Textual layout of collected entries in tree or list form.

use crate::walk::Entry;
use clap::ValueEnum;

/// Output layout for a rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawing tree inside a fenced code block.
    #[default]
    Tree,
    /// Indented bullet list.
    List,
}

/// Render collected entries into the final snapshot string.
///
/// The tree format wraps the body in a code fence with the root's base name
/// as a heading; the list format emits the root as a top-level bullet with
/// the body indented beneath it.
pub fn render(entries: &[Entry], root_name: &str, format: OutputFormat, show_size: bool) -> String {
    let mut body = String::new();
    for entry in entries {
        body.push_str(&entry_line(entry, format, show_size));
        body.push('\n');
    }
    match format {
        OutputFormat::Tree => format!("```\n{root_name}\n{body}```"),
        OutputFormat::List => format!("\n- {root_name}\n{body}"),
    }
}

fn entry_line(entry: &Entry, format: OutputFormat, show_size: bool) -> String {
    let (indent, prefix) = match format {
        OutputFormat::Tree => (
            "\u{2502}   ".repeat(entry.depth - 1), // │
            if entry.is_last {
                "\u{2514}\u{2500}\u{2500}" // └──
            } else {
                "\u{251c}\u{2500}\u{2500}" // ├──
            },
        ),
        OutputFormat::List => ("  ".repeat(entry.depth), "- "),
    };

    let mut line = format!("{indent}{prefix}{}", entry.name);
    if show_size && !entry.is_dir {
        if let Some(suffix) = size_suffix(entry.size) {
            line.push_str(&suffix);
        }
    }
    line
}

/// Size annotation in KB to one decimal place. Sizes that would display as
/// `0.0` produce no annotation at all.
fn size_suffix(bytes: u64) -> Option<String> {
    let kb = bytes as f64 / 1024.0;
    let text = format!("{kb:.1}");
    if text == "0.0" {
        None
    } else {
        Some(format!(" ({text} KB)"))
    }
}
