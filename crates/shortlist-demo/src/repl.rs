//! The interactive loop and snapshot rendering.

use std::io::{self, BufRead, Write};

use console::style;
use shortlist::{Link, ListSession, Viewport};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the filter to the given text.
    Filter(String),
    /// Reveal one more page.
    More,
    /// Clear the filter.
    Clear,
    /// Exit the loop.
    Quit,
    /// An unrecognized `:` command.
    Unknown(String),
}

/// Lines starting with `:` are commands; anything else is filter text.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    match line {
        ":more" | ":m" => Command::More,
        ":clear" | ":c" => Command::Clear,
        ":quit" | ":q" => Command::Quit,
        _ if line.starts_with(':') => Command::Unknown(line.to_string()),
        _ => Command::Filter(line.to_string()),
    }
}

/// Runs the interactive session until `:quit` or end of input.
pub fn run(session: &mut ListSession<Link>) -> anyhow::Result<()> {
    println!(
        "{}",
        style("type to filter; :more loads more, :clear resets, :quit exits").dim()
    );
    render(&session.viewport());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse(&line) {
            Command::Filter(text) => session.filter_input(text),
            Command::More => {
                if session.viewport().has_more {
                    session.load_more();
                } else {
                    println!("{}", style("nothing more to load").dim());
                }
            }
            Command::Clear => session.filter_input(""),
            Command::Quit => return Ok(()),
            Command::Unknown(cmd) => {
                println!("{}", style(format!("unknown command: {}", cmd)).red());
                continue;
            }
        }
        render(&session.viewport());
    }
}

/// Renders one snapshot: the visible links and a "showing X of Y" footer.
pub fn render(view: &Viewport<'_, Link>) {
    if !view.filter_text.is_empty() {
        println!(
            "{} {}",
            style("filter:").dim(),
            style(view.filter_text).yellow()
        );
    }

    if view.is_empty() {
        println!("{}", style("no matching links").dim());
        return;
    }

    for link in &view.visible {
        println!(
            "  {}  {}",
            style(&link.name).cyan().bold(),
            style(&link.uri).dim()
        );
    }

    let mut footer = format!("showing {} of {} matches", view.len(), view.match_count);
    if view.match_count != view.total_count {
        footer.push_str(&format!(" ({} links total)", view.total_count));
    }
    println!("{}", style(footer).dim());

    if view.has_more {
        println!("{}", style(":more to load more").green());
    }
}
