//! Browse command: interactive day navigation in the terminal.

use std::io::Write;
use std::sync::Arc;

use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::show::{start_navigator, surface_text};
use crate::config::Settings;
use crate::models::Clock;
use crate::navigator::NavIntent;

const PROMPT: &str = "[p]rev [n]ext [t]oday YYYY-MM-DD [q]uit > ";

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Nothing,
    Go(NavIntent),
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "" => Input::Nothing,
        "q" | "quit" | "exit" => Input::Quit,
        "p" | "prev" => Input::Go(NavIntent::Prev),
        "n" | "next" => Input::Go(NavIntent::Next),
        "t" | "today" => Input::Go(NavIntent::Today),
        other => Input::Go(NavIntent::Pick(other.to_string())),
    }
}

/// Browse days interactively, one render per navigation.
pub async fn cmd_browse(
    settings: &Settings,
    clock: Arc<dyn Clock>,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let source = settings.open_source()?;
    let mut nav = start_navigator(clock, date, None)?;

    nav.load(source.as_ref()).await;
    println!("{}", surface_text(nav.surface()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", style(PROMPT).dim());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Nothing => continue,
            Input::Go(intent) => {
                let Some(pending) = nav.apply(&intent) else {
                    println!("{} Unrecognized input: {}", style("!").yellow(), line.trim());
                    continue;
                };
                let result = pending.fetch(source.as_ref()).await;
                nav.complete(&pending, result);
                println!("\n{}", surface_text(nav.surface()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("  "), Input::Nothing);
        assert_eq!(parse_input("p\n"), Input::Go(NavIntent::Prev));
        assert_eq!(parse_input("next"), Input::Go(NavIntent::Next));
        assert_eq!(parse_input("t"), Input::Go(NavIntent::Today));
        assert_eq!(
            parse_input("2026-02-01"),
            Input::Go(NavIntent::Pick("2026-02-01".to_string()))
        );
    }
}
