//! Line-oriented commands that drive a `GameSession`.

use std::io::Write;
use std::str::FromStr;

use urarulla_content::application::query_handlers::QuestionRef;
use urarulla_content::domain::records::QuestionCategory;
use urarulla_core::characteristic::Characteristic;
use urarulla_core::error::DomainError;
use urarulla_core::rng::DeterministicRng;
use urarulla_session::application::game::GameSession;
use urarulla_session::application::query_handlers::session_view;

use crate::error::AppError;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  add <name>                  add a player
  remove <name>               remove the first player with that name
  start                       start the game
  next                        pass the turn
  score <amount>              add to the turn holder's score
  award <characteristic> <n>  add n points to a characteristic of the turn holder
  question <category>         draw a characteristic, industry or tricky question
  industry <name>             list the questions for one industry
  status                      print the session as JSON
  help                        show this text
  quit                        exit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <name>`
    Add(String),
    /// `remove <name>`
    Remove(String),
    /// `start`
    Start,
    /// `next`
    Next,
    /// `score <amount>`
    Score(f64),
    /// `award <characteristic> <points>`
    Award(Characteristic, i32),
    /// `question <category>`
    Question(QuestionCategory),
    /// `industry <name>`
    Industry(String),
    /// `status`
    Status,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

fn parse_category(s: &str) -> Result<QuestionCategory, DomainError> {
    match s.to_ascii_lowercase().as_str() {
        "characteristic" => Ok(QuestionCategory::Characteristic),
        "industry" => Ok(QuestionCategory::Industry),
        "tricky" => Ok(QuestionCategory::Tricky),
        other => Err(DomainError::Validation(format!(
            "unknown question category: {other}"
        ))),
    }
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, DomainError> {
    arg.filter(|a| !a.is_empty())
        .ok_or_else(|| DomainError::Validation(format!("usage: {usage}")))
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match verb.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(required(Some(rest), "add <name>")?.to_owned())),
            "remove" => Ok(Self::Remove(required(Some(rest), "remove <name>")?.to_owned())),
            "start" => Ok(Self::Start),
            "next" => Ok(Self::Next),
            "score" => {
                let amount = required(Some(rest), "score <amount>")?;
                amount
                    .parse::<f64>()
                    .map(Self::Score)
                    .map_err(|e| DomainError::Validation(format!("invalid amount {amount}: {e}")))
            }
            "award" => {
                let mut args = rest.split_whitespace();
                let usage = "award <characteristic> <points>";
                let kind: Characteristic = required(args.next(), usage)?.parse()?;
                let points = required(args.next(), usage)?;
                let points = points
                    .parse::<i32>()
                    .map_err(|e| DomainError::Validation(format!("invalid points {points}: {e}")))?;
                Ok(Self::Award(kind, points))
            }
            "question" => Ok(Self::Question(parse_category(required(
                Some(rest),
                "question <category>",
            )?)?)),
            "industry" => Ok(Self::Industry(
                required(Some(rest), "industry <name>")?.to_owned(),
            )),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(DomainError::Validation(format!("unknown command: {other}"))),
        }
    }
}

fn describe(question: QuestionRef<'_>) -> String {
    let answers: Vec<&str> = match question {
        QuestionRef::Characteristic(q) => q.answers.iter().map(|a| a.text.as_str()).collect(),
        QuestionRef::Industry(q) => q.answers.iter().map(String::as_str).collect(),
        QuestionRef::Tricky(q) => q.answers.iter().map(String::as_str).collect(),
    };
    let mut text = question.text().to_owned();
    for (i, answer) in answers.iter().enumerate() {
        text.push_str(&format!("\n  {}. {answer}", i + 1));
    }
    text
}

/// Runs one command against `game`, writing the reply to `out`.
///
/// Returns `Ok(false)` when the host should stop. Rejected session
/// operations are reported to `out` and do not end the loop.
///
/// # Errors
///
/// Returns `AppError::Io` if writing to `out` fails and `AppError::Render`
/// if the status snapshot cannot be serialized.
pub fn execute(
    game: &mut GameSession,
    command: Command,
    rng: &mut dyn DeterministicRng,
    out: &mut dyn Write,
) -> Result<bool, AppError> {
    match command {
        Command::Add(name) => match game.add_player(&name) {
            Ok(_) => writeln!(out, "added {name} ({} players)", game.state().player_count())?,
            Err(e) => writeln!(out, "rejected: {e}")?,
        },
        Command::Remove(name) => match game.remove_player(&name) {
            Some(removed) => writeln!(out, "removed {name} from slot {}", removed.index)?,
            None => writeln!(out, "no player named {name}")?,
        },
        Command::Start => {
            game.start_game();
            writeln!(out, "game started")?;
        }
        Command::Next => match game.advance_turn() {
            Some(turn) => {
                let name = game
                    .state()
                    .current_turn_player()
                    .map_or("?", |p| p.name.as_str());
                writeln!(out, "turn: {name} (slot {})", turn.index)?;
                if turn.threshold_reached {
                    writeln!(out, "{name} is ready for the next question section")?;
                }
            }
            None => writeln!(out, "need at least two players to take turns")?,
        },
        Command::Score(amount) => match game.add_score(amount) {
            Ok(total) => writeln!(out, "score: {total}")?,
            Err(e) => writeln!(out, "rejected: {e}")?,
        },
        Command::Award(kind, points) => match game.award_characteristic(kind, points) {
            Ok(scores) => writeln!(out, "{kind}: {} (sum {})", scores.get(kind), scores.sum())?,
            Err(e) => writeln!(out, "rejected: {e}")?,
        },
        Command::Question(category) => match game.draw_question(category, rng) {
            Some(question) => writeln!(out, "{}", describe(question))?,
            None => writeln!(out, "no questions in that category")?,
        },
        Command::Industry(name) => {
            let mut found = false;
            for question in game.industry_questions(&name) {
                found = true;
                writeln!(out, "{}", describe(QuestionRef::Industry(question)))?;
            }
            if !found {
                writeln!(out, "no questions for industry {name}")?;
            }
        }
        Command::Status => {
            let json = serde_json::to_string_pretty(&session_view(game.state()))?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
