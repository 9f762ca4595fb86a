//! Headless command mode.
//!
//! Enabled with `ONBOARD_CLI_SCRIPT=1`; reads one command per line from
//! stdin until `exit` or end of input. Values with spaces are quoted
//! shell-style. This is the surface the integration tests drive.

use std::io::BufRead;

use crate::cli::{
    output, print_funds, print_outstanding, print_progress, print_review, print_submission,
    CliError,
};
use crate::errors::WizardError;
use crate::utils::build_info;
use crate::wizard::options::{parse_change, FIELD_KEYS};
use crate::wizard::{SessionEvent, WizardSession};

const COMMANDS: [&str; 14] = [
    "set", "toggle", "clear", "next", "back", "undo", "status", "review", "funds", "dump",
    "submit", "version", "help", "exit",
];

/// Runs the command loop against stdin.
pub fn run(session: &mut WizardSession) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        if !process_line(session, &line?)? {
            break;
        }
    }
    Ok(())
}

/// Handles one command line. Returns `false` when the loop should stop.
pub fn process_line(session: &mut WizardSession, line: &str) -> Result<bool, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(true);
    }

    let words = match shell_words::split(trimmed) {
        Ok(words) => words,
        Err(err) => {
            output::warning(format!("Could not parse line: {err}"));
            return Ok(true);
        }
    };
    let Some((command, args)) = words.split_first() else {
        return Ok(true);
    };

    match command.to_ascii_lowercase().as_str() {
        "set" => cmd_set(session, args),
        "toggle" => cmd_toggle(session, args),
        "clear" => cmd_clear(session, args),
        "next" => {
            if session.advance() == SessionEvent::Held {
                output::warning("Cannot continue; this step is incomplete:");
                print_outstanding(&session.outstanding());
            } else {
                print_progress(session);
            }
        }
        "back" => {
            match session.retreat() {
                SessionEvent::Moved => print_progress(session),
                _ => output::warning("Already at the first step."),
            };
        }
        "undo" => {
            match session.undo() {
                SessionEvent::Applied => output::info("Reverted the last change."),
                SessionEvent::Frozen => output::warning("Session is submitted; nothing can change."),
                _ => output::warning("Nothing to undo."),
            };
        }
        "status" => cmd_status(session),
        "review" => print_review(&session.review()),
        "funds" => print_funds(session.catalog()),
        "dump" => {
            let json = serde_json::to_string_pretty(session.answers()).map_err(WizardError::from)?;
            println!("{json}");
        }
        "submit" => match session.submit() {
            SessionEvent::Submitted => print_submission(session),
            SessionEvent::Frozen => output::warning("Application already submitted."),
            _ => {
                output::warning("Submission refused:");
                print_outstanding(&session.outstanding());
            }
        },
        "version" => cmd_version(),
        "help" => cmd_help(),
        "exit" | "quit" => return Ok(false),
        other => {
            output::warning(format!("Unknown command: {other}"));
            if let Some(suggestion) = nearest(other, &COMMANDS) {
                output::info(format!("Did you mean `{suggestion}`?"));
            }
        }
    }
    Ok(true)
}

fn cmd_set(session: &mut WizardSession, args: &[String]) {
    let Some((key, rest)) = args.split_first() else {
        output::warning("Usage: set <field> <value>");
        return;
    };
    let value = rest.join(" ");
    apply_parsed(session, key, &value);
}

fn cmd_toggle(session: &mut WizardSession, args: &[String]) {
    if args.is_empty() {
        output::warning("Usage: toggle <source of wealth tag>");
        return;
    }
    let tag = args.join(" ");
    apply_parsed(session, "source_of_wealth", &tag);
}

fn cmd_clear(session: &mut WizardSession, args: &[String]) {
    let Some(key) = args.first() else {
        output::warning("Usage: clear <field>");
        return;
    };
    apply_parsed(session, key, "");
}

fn apply_parsed(session: &mut WizardSession, key: &str, value: &str) {
    match parse_change(key, value) {
        Ok(change) => {
            if session.apply(change) == SessionEvent::Frozen {
                output::warning("Session is submitted; nothing can change.");
            } else {
                output::success(format!("{key} updated."));
            }
        }
        Err(WizardError::UnknownField(name)) => {
            output::warning(format!("Unknown field: {name}"));
            if let Some(suggestion) = nearest(&name, &FIELD_KEYS) {
                output::info(format!("Did you mean `{suggestion}`?"));
            }
        }
        Err(err) => output::warning(err),
    }
}

fn cmd_status(session: &WizardSession) {
    print_progress(session);
    if session.is_submitted() {
        output::info("Application submitted; the session is read-only.");
        return;
    }
    if session.can_proceed() {
        output::success("Step complete; `next` is available.");
    } else {
        output::info("Outstanding requirements:");
        print_outstanding(&session.outstanding());
    }
    let visibility = session.visibility();
    if visibility.fatca_warning {
        output::warning("US Persons require additional FATCA W-9 documentation.");
    }
    if visibility.pep_warning {
        output::warning("PEP status requires Enhanced Due Diligence.");
    }
}

fn cmd_version() {
    let meta = build_info::current();
    output::section(format!("Onboard Core {}", meta.version));
    output::detail(format!("Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::detail(format!("Built at   : {}", meta.timestamp));
    output::detail(format!("Target     : {}", meta.target));
    output::detail(format!("Profile    : {}", meta.profile));
    output::detail(format!("Rustc      : {}", meta.rustc));
}

fn cmd_help() {
    output::section("Commands");
    output::detail("set <field> <value>    update one answer");
    output::detail("toggle <tag>           toggle a source-of-wealth tag");
    output::detail("clear <field>          reset one answer");
    output::detail("next / back            navigate between steps");
    output::detail("undo                   revert the last change");
    output::detail("status                 show step, gating, and notices");
    output::detail("review                 show the application summary");
    output::detail("funds                  list the fund catalog");
    output::detail("dump                   print the answers as JSON");
    output::detail("submit                 submit from the review step");
    output::detail("version / help / exit");
}

/// Closest match above a similarity floor, for typo suggestions.
fn nearest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), *candidate))
        .filter(|(score, _)| *score > 0.84)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate)
}
