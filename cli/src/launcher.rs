use std::io::{BufRead, Write};
use sweeper_core::{Difficulty, Preset};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Choice {
    Play(Difficulty),
    Quit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    let mut words = line.split_whitespace();
    let first = words.next()?;

    if first.eq_ignore_ascii_case("q") || first.eq_ignore_ascii_case("quit") {
        return Some(Choice::Quit);
    }

    if first.eq_ignore_ascii_case("c") || first.eq_ignore_ascii_case("custom") {
        let rows = words.next()?.parse().ok()?;
        let cols = words.next()?.parse().ok()?;
        let mines = words.next()?.parse().ok()?;
        let difficulty = Difficulty::new(rows, cols, mines).validate().ok()?;
        return Some(Choice::Play(difficulty));
    }

    let preset = match first.parse::<usize>() {
        Ok(number) => *Preset::ALL.get(number.checked_sub(1)?)?,
        Err(_) => first.parse::<Preset>().ok()?,
    };
    Some(Choice::Play(preset.difficulty()))
}

fn print_menu(output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "Minesweeper Launcher")?;
    for (i, preset) in Preset::ALL.into_iter().enumerate() {
        let Difficulty { rows, cols, mines } = preset.difficulty();
        writeln!(output, "  {}) {:<6} {}x{}, {} mines", i + 1, preset, rows, cols, mines)?;
    }
    writeln!(output, "  c <rows> <cols> <mines>  custom board")?;
    writeln!(output, "  q) quit")?;
    Ok(())
}

/// Asks for a difficulty until a valid one is given, `None` when the player quits or input ends.
pub(crate) fn choose(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Option<Difficulty>> {
    print_menu(output)?;
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_choice(&line) {
            Some(Choice::Play(difficulty)) => {
                log::info!("Chose {:?}", difficulty);
                return Ok(Some(difficulty));
            }
            Some(Choice::Quit) => return Ok(None),
            None if line.trim().is_empty() => {}
            None => writeln!(output, "Pick 1-3, a preset name, c <rows> <cols> <mines> or q")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn numbers_and_names_select_presets() {
        assert_eq!(parse_choice("1"), Some(Choice::Play(Preset::Easy.difficulty())));
        assert_eq!(parse_choice(" medium\n"), Some(Choice::Play(Preset::Medium.difficulty())));
        assert_eq!(parse_choice("3"), Some(Choice::Play(Preset::Hard.difficulty())));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("4"), None);
    }

    #[test]
    fn custom_boards_are_validated() {
        assert_eq!(
            parse_choice("c 5 7 3"),
            Some(Choice::Play(Difficulty::new(5, 7, 3)))
        );
        assert_eq!(parse_choice("custom 0 7 3"), None);
        assert_eq!(parse_choice("c 5 7"), None);
        assert_eq!(parse_choice("c 300 7 3"), None);
    }

    #[test]
    fn quit_and_garbage() {
        assert_eq!(parse_choice("q"), Some(Choice::Quit));
        assert_eq!(parse_choice("QUIT"), Some(Choice::Quit));
        assert_eq!(parse_choice("xyz"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn choose_retries_until_valid() {
        let mut input = Cursor::new("nope\n\n2\n");
        let mut output = Vec::new();

        let difficulty = choose(&mut input, &mut output).unwrap();

        assert_eq!(difficulty, Some(Preset::Medium.difficulty()));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Minesweeper Launcher"));
        assert_eq!(output.matches("Pick 1-3").count(), 1);
    }

    #[test]
    fn choose_stops_at_end_of_input() {
        let mut output = Vec::new();
        assert_eq!(choose(&mut Cursor::new(""), &mut output).unwrap(), None);
    }
}
