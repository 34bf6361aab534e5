//! Rps command - stone-paper-scissor against the computer

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use log::info;
use serde::Serialize;

use crate::{
    cli::{config::CommonConfig, output},
    ports::ChoiceSource,
    rps::{Choice, Resolver, Round, Scoreboard},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play stone-paper-scissor against a random opponent")]
pub struct RpsArgs {
    /// Random seed for the computer's throws (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long, short = 'n')]
    pub rounds: Option<u32>,
}

/// Events emitted in `--json` mode, one per line
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Round(&'a Round),
    Score(&'a Scoreboard),
    Error { message: String },
}

pub fn execute(args: RpsArgs, common: &CommonConfig) -> Result<()> {
    let mut resolver = Resolver::random(args.seed.or(common.seed));
    match resolver.source().seed() {
        Some(seed) => info!("computer throws seeded with {seed}"),
        None => info!("computer throws seeded from OS entropy"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout.lock(), &mut resolver, &args, common)
}

/// Play rounds read from `input` until `quit`, end of input, or the round
/// limit. Returns after printing the final score.
pub fn run_session<R: BufRead, W: Write, S: ChoiceSource>(
    input: R,
    out: &mut W,
    resolver: &mut Resolver<S>,
    args: &RpsArgs,
    common: &CommonConfig,
) -> Result<()> {
    if !common.json {
        output::write_section(out, "Stone Paper Scissor")?;
        writeln!(out, "Throw stone, paper or scissor; 'score' or 'quit'.")?;
    }

    let limit_reached =
        |resolver: &Resolver<S>| args.rounds.is_some_and(|limit| resolver.rounds() >= limit);

    let mut lines = input.lines();
    while !limit_reached(&*resolver) {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "score" => show_score(out, &resolver.scores(), common)?,
            _ => match line.parse::<Choice>() {
                Ok(choice) => {
                    let round = resolver.play(choice);
                    show_round(out, &round, common)?;
                }
                Err(e) => report_error(out, common, &e.to_string())?,
            },
        }
    }

    let scores = resolver.scores();
    info!(
        "session over after {} rounds against {} opponent: user {} - computer {}",
        resolver.rounds(),
        resolver.source().name(),
        scores.user,
        scores.opponent
    );
    show_score(out, &scores, common)
}

fn show_round<W: Write>(out: &mut W, round: &Round, common: &CommonConfig) -> Result<()> {
    if common.json {
        return output::write_json(out, &Event::Round(round));
    }
    writeln!(out, "{round}")?;
    writeln!(
        out,
        "Score: you {} - computer {}",
        round.scores.user, round.scores.opponent
    )?;
    Ok(())
}

fn show_score<W: Write>(out: &mut W, scores: &Scoreboard, common: &CommonConfig) -> Result<()> {
    if common.json {
        return output::write_json(out, &Event::Score(scores));
    }
    output::write_kv(out, "You", &scores.user.to_string())?;
    output::write_kv(out, "Computer", &scores.opponent.to_string())?;
    Ok(())
}

fn report_error<W: Write>(out: &mut W, common: &CommonConfig, message: &str) -> Result<()> {
    if common.json {
        output::write_json(
            out,
            &Event::Error {
                message: message.to_string(),
            },
        )
    } else {
        writeln!(out, "error: {message}")?;
        Ok(())
    }
}
