use clap::Parser;
use std::io;
use sweeper_core::Preset;

mod launcher;
mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the launcher and start with this difficulty (easy, medium, hard)
    #[arg(short, long)]
    preset: Option<Preset>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let mut preset = args.preset;
    let mut seeds = play::Seeds::new(args.seed);
    loop {
        let difficulty = match preset.take() {
            Some(preset) => preset.difficulty(),
            None => match launcher::choose(&mut input, &mut output)? {
                Some(difficulty) => difficulty,
                None => break,
            },
        };

        match play::run(difficulty, &mut seeds, &mut input, &mut output)? {
            play::Exit::Launcher => continue,
            play::Exit::Quit => break,
        }
    }

    log::debug!("Bye");
    Ok(())
}
