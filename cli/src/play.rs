use anyhow::Context;
use std::io::{BufRead, Write};
use std::time::Instant;
use sweeper_core::{ClickResult, Coord2, Difficulty, Session};

use crate::render;

/// Where to go after a game loop returns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Exit {
    Launcher,
    Quit,
}

/// Seed source for new boards. A forced seed is used first and then counted up so restarts stay
/// reproducible.
#[derive(Debug)]
pub(crate) struct Seeds {
    forced: Option<u64>,
}

impl Seeds {
    pub(crate) fn new(forced: Option<u64>) -> Self {
        Self { forced }
    }

    pub(crate) fn next(&mut self) -> u64 {
        match self.forced.as_mut() {
            Some(seed) => {
                let next = *seed;
                *seed = seed.wrapping_add(1);
                next
            }
            None => rand::random(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Click(Coord2),
    Reveal(Coord2),
    Flag(Coord2),
    ToggleMode,
    Restart,
    Launcher,
    Quit,
}

fn parse_coords<'a>(mut words: impl Iterator<Item = &'a str>) -> Option<Coord2> {
    let row = words.next()?.parse().ok()?;
    let col = words.next()?.parse().ok()?;
    words.next().is_none().then_some((row, col))
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let command = match first.to_ascii_lowercase().as_str() {
        "r" => Command::Reveal(parse_coords(&mut words)?),
        "f" => Command::Flag(parse_coords(&mut words)?),
        "m" => Command::ToggleMode,
        "n" => Command::Restart,
        "l" => Command::Launcher,
        "q" => Command::Quit,
        _ => Command::Click(parse_coords(line.split_whitespace())?),
    };
    if matches!(
        command,
        Command::ToggleMode | Command::Restart | Command::Launcher | Command::Quit
    ) && words.next().is_some()
    {
        return None;
    }
    Some(command)
}

const HELP: &str = "Commands: <row> <col> click, r <row> <col> reveal, f <row> <col> flag, \
                    m switch click mode, n new game, l launcher, q quit";

/// Plays games of `difficulty` until the player leaves or input ends.
pub(crate) fn run(
    difficulty: Difficulty,
    seeds: &mut Seeds,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Exit> {
    let seed = seeds.next();
    let mut session = Session::new(difficulty, seed)
        .with_context(|| format!("Could not start a game with {difficulty:?}"))?;
    log::info!("Started {:?} with seed {}", difficulty, seed);
    writeln!(output, "{HELP}")?;

    let mut last_tick = Instant::now();
    let mut line = String::new();
    loop {
        writeln!(output, "{}", render::status(&session))?;
        write!(output, "{}", render::board(session.board()))?;
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Exit::Quit);
        }
        let now = Instant::now();
        session.tick(now - last_tick);
        last_tick = now;

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(output, "{HELP}")?;
            }
            continue;
        };
        log::debug!("{:?}", command);

        let coords = match command {
            Command::Click(coords) | Command::Reveal(coords) | Command::Flag(coords) => coords,
            Command::ToggleMode => {
                session.toggle_click_mode();
                continue;
            }
            Command::Restart => {
                session.restart(seeds.next())?;
                last_tick = Instant::now();
                continue;
            }
            Command::Launcher => return Ok(Exit::Launcher),
            Command::Quit => return Ok(Exit::Quit),
        };

        if session.board().cell_view(coords).is_none() {
            let (rows, cols) = session.board().size();
            writeln!(output, "No cell at {} {}, board is {}x{}", coords.0, coords.1, rows, cols)?;
            continue;
        }

        let result = match command {
            Command::Reveal(coords) => ClickResult::Reveal(session.reveal(coords)),
            Command::Flag(coords) => ClickResult::Flag(session.toggle_flag(coords)),
            _ => session.click(coords),
        };
        if let ClickResult::Reveal(result) = result {
            log::debug!("Opened {} cells, {:?}", result.opened.len(), result.outcome);
            if result.outcome.is_finished() {
                writeln!(output, "{}", render::status(&session))?;
                write!(output, "{}", render::board(session.board()))?;
                writeln!(output, "Press n for a new game, l for the launcher or q to quit")?;
            }
        }
    }
}
