//! Terminal presentation layer.
//!
//! The loop below owns no game logic: it collects input, runs the
//! caller-side validators from `domain::rules`, issues commands to the
//! session, and renders the snapshots that come back. It is generic over
//! its input/output streams so the whole flow can be driven from tests.

pub mod input;
pub mod render;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use crate::domain::command::Command;
use crate::domain::rules;
use crate::domain::snapshot::{scoreboard, PhaseSnapshot};
use crate::domain::state::{Phase, PlayerId};
use crate::services::session::GameSession;
use crate::store::slot::GameStore;

use self::input::MetaCommand;

/// What a prompt produced: a value, a meta command, or end of input.
enum Prompted {
    Line(String),
    Meta(MetaCommand),
    Eof,
}

/// Drive the interactive loop until the user quits or input ends.
pub fn run<S, R, W>(session: &mut GameSession<S>, input: &mut R, out: &mut W) -> io::Result<()>
where
    S: GameStore,
    R: BufRead,
    W: Write,
{
    loop {
        let keep_going = match session.state().phase {
            Phase::Setup => setup_step(session, input, out)?,
            Phase::Bidding => bidding_step(session, input, out)?,
            Phase::Results => results_step(session, input, out)?,
            Phase::GameOver => game_over_step(session, input, out)?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn setup_step<S: GameStore, R: BufRead, W: Write>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    writeln!(out, "\nNew game — enter 3 to 6 player names, comma-separated.")?;
    let names = match prompt(input, out, "players: ")? {
        Prompted::Line(line) => input::parse_names(&line),
        Prompted::Meta(MetaCommand::Quit) | Prompted::Eof => return Ok(false),
        Prompted::Meta(_) => return Ok(true),
    };
    if let Err(e) = rules::validate_player_names(&names) {
        writeln!(out, "  ✗ {e}")?;
        return Ok(true);
    }
    session.dispatch(Command::StartGame { names });
    Ok(true)
}

fn bidding_step<S: GameStore, R: BufRead, W: Write>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let snap = session.snapshot();
    let PhaseSnapshot::Bidding(bidding) = snap.phase.clone() else {
        return Ok(true);
    };
    writeln!(out, "\n{}", render::round_header(&snap, &bidding.round))?;
    write!(out, "{}", render::scoreboard_table(&scoreboard(session.state())))?;

    // Trump first: an empty line keeps whatever is declared.
    match prompt(input, out, "trump [s/h/d/c/nt/w/none, enter to keep]: ")? {
        Prompted::Line(line) => match input::parse_trump(&line) {
            Ok(Some(trump)) => {
                session.dispatch(Command::SetTrump { trump });
            }
            Ok(None) => {}
            Err(e) => {
                writeln!(out, "  ✗ {e}")?;
                return Ok(true);
            }
        },
        Prompted::Meta(meta) => return Ok(handle_meta(session, meta)),
        Prompted::Eof => return Ok(false),
    }

    let mut bids: BTreeMap<PlayerId, u8> = BTreeMap::new();
    let dealer_id = bidding.round.dealer_id.clone();
    for player in &bidding.bid_order {
        // The dealer bids last and must dodge the forbidden total.
        if player.id == dealer_id {
            let others: u32 = bids.values().map(|&b| u32::from(b)).sum();
            if let Some(forbidden) =
                rules::forbidden_dealer_bid(bidding.round.round_no, others)
            {
                writeln!(out, "  (dealer may not bid {forbidden})")?;
            }
        }
        let label = format!("{} bid (0..={}): ", player.name, bidding.max_bid);
        match prompt(input, out, &label)? {
            Prompted::Line(line) => match input::parse_count(&line, bidding.max_bid) {
                Ok(bid) => {
                    bids.insert(player.id.clone(), bid);
                }
                Err(e) => {
                    writeln!(out, "  ✗ {e} — starting the bids over")?;
                    return Ok(true);
                }
            },
            Prompted::Meta(meta) => return Ok(handle_meta(session, meta)),
            Prompted::Eof => return Ok(false),
        }
    }

    if let Err(e) = rules::validate_bids(session.state(), &bids) {
        writeln!(out, "  ✗ {e} — starting the bids over")?;
        return Ok(true);
    }
    session.dispatch(Command::SubmitBids { bids });
    Ok(true)
}

fn results_step<S: GameStore, R: BufRead, W: Write>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let snap = session.snapshot();
    let PhaseSnapshot::Results(results) = snap.phase.clone() else {
        return Ok(true);
    };
    let scored_round_no = results.round.round_no;
    writeln!(
        out,
        "\nRound {} results — tricks must total {}.",
        scored_round_no, results.expected_tricks
    )?;

    let mut tricks: BTreeMap<PlayerId, u8> = BTreeMap::new();
    for player in &snap.game.players {
        let label = format!("{} tricks won: ", player.name);
        match prompt(input, out, &label)? {
            Prompted::Line(line) => match input::parse_count(&line, results.round.round_no) {
                Ok(count) => {
                    tricks.insert(player.id.clone(), count);
                }
                Err(e) => {
                    writeln!(out, "  ✗ {e} — starting the results over")?;
                    return Ok(true);
                }
            },
            Prompted::Meta(meta) => return Ok(handle_meta(session, meta)),
            Prompted::Eof => return Ok(false),
        }
    }

    if let Err(e) = rules::validate_tricks(session.state(), &tricks) {
        writeln!(out, "  ✗ {e} — starting the results over")?;
        return Ok(true);
    }
    session.dispatch(Command::SubmitResults { tricks });

    if let Some(round) = session.state().rounds.get(&scored_round_no) {
        write!(out, "{}", render::round_result(round, &session.state().players))?;
    }
    Ok(true)
}

fn game_over_step<S: GameStore, R: BufRead, W: Write>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let snap = session.snapshot();
    if let PhaseSnapshot::GameOver(over) = &snap.phase {
        writeln!(out, "\nGame over after {} scored round(s).", over.rounds_scored)?;
        write!(out, "{}", render::standings_table(&over.standings))?;
    }
    match prompt(input, out, "play again? [reset/quit]: ")? {
        Prompted::Meta(MetaCommand::Reset) => {
            session.dispatch(Command::ResetGame);
            Ok(true)
        }
        Prompted::Meta(MetaCommand::Quit) | Prompted::Eof => Ok(false),
        _ => Ok(true),
    }
}

/// Meta commands are valid at any prompt. Returns whether to keep looping.
fn handle_meta<S: GameStore>(session: &mut GameSession<S>, meta: MetaCommand) -> bool {
    match meta {
        MetaCommand::End => {
            session.dispatch(Command::EndGameEarly);
            true
        }
        MetaCommand::Reset => {
            session.dispatch(Command::ResetGame);
            true
        }
        MetaCommand::Quit => false,
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Prompted> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Prompted::Eof);
    }
    if let Some(meta) = input::parse_meta(&line) {
        return Ok(Prompted::Meta(meta));
    }
    Ok(Prompted::Line(line.trim_end().to_string()))
}
