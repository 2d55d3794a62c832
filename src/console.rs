//! Line-oriented front end
//!
//! A blocking read-eval loop: one command per line while exploring, then
//! one line naming the accused. Generic over reader and writer so whole
//! runs can be scripted.

use crate::game::{narrative, ClueIndex, Command, Game, Notice, Variant, Verdict};
use std::io::{self, BufRead, Write};

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct Session {
    pub clues: ClueIndex,
    pub verdict: Option<Verdict>,
}

/// Play one complete run of `game`
pub fn run_console<R: BufRead, W: Write>(
    game: &Game,
    variant: Variant,
    mut input: R,
    mut output: W,
) -> io::Result<Session> {
    for line in narrative::banner(&game.title, game.map.entry().name()) {
        writeln!(output, "{}", line)?;
    }

    let mut engine = game.explore(variant);
    print_notices(&mut output, &engine.take_opening())?;

    let mut line = String::new();
    while let Some(current) = engine.current() {
        writeln!(output)?;
        for choice in narrative::choices(current) {
            writeln!(output, "{}", choice)?;
        }
        write!(output, "→ ")?;
        output.flush()?;

        line.clear();
        let notices = if input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed while exploring");
            engine.step(Command::Quit)
        } else {
            engine.step_input(&line)
        };
        writeln!(output)?;
        print_notices(&mut output, &notices)?;
    }

    let clues = engine.into_clues();
    if variant.collects_clues() {
        writeln!(output, "\n{}", narrative::CLUES_HEADER)?;
        for entry in narrative::clue_listing(&clues) {
            writeln!(output, "{}", entry)?;
        }
    }

    let verdict = if variant.resolves_suspects() {
        writeln!(output, "\n{}", narrative::ACCUSATION_HEADER)?;
        write!(output, "{}\n→ ", narrative::ACCUSATION_PROMPT)?;
        output.flush()?;

        line.clear();
        input.read_line(&mut line)?;
        let verdict = game.accuse(&clues, &line);

        writeln!(output, "\n{}", narrative::RESULT_HEADER)?;
        writeln!(output, "{}", narrative::verdict_line(&verdict))?;
        Some(verdict)
    } else {
        None
    };

    writeln!(output, "\n{}", narrative::FAREWELL)?;
    Ok(Session { clues, verdict })
}

fn print_notices<W: Write>(output: &mut W, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        writeln!(output, "{}", narrative::describe(notice))?;
    }
    Ok(())
}
