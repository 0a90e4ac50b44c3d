//! Prompt-driven read loop over simulator commands

use super::command::{parse_line, Command};
use super::network::AmigoNet;
use crate::error::{ProbeTableError, Result};
use std::io::{BufRead, Write};

/// Printed before every read
pub const PROMPT: &str = "> ";

/// Counters collected over one [`Session::run`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Input lines read
    pub lines: usize,
    /// Lines that parsed to a command keyword
    pub commands: usize,
    /// Malformed or unrecognized commands reported
    pub errors: usize,
}

enum Flow {
    Continue,
    Exit,
}

/// Drives an [`AmigoNet`] from line-oriented text input
#[derive(Debug)]
pub struct Session {
    network: AmigoNet,
}

impl Session {
    /// Wrap a network
    pub fn new(network: AmigoNet) -> Self {
        Self { network }
    }

    /// The driven network
    pub fn network(&self) -> &AmigoNet {
        &self.network
    }

    /// Take the network back
    pub fn into_network(self) -> AmigoNet {
        self.network
    }

    /// Read commands until `exit` or end of input
    ///
    /// Command output and echoed comments go to `out`; malformed and
    /// unrecognized commands, including lines that are not valid UTF-8, are
    /// reported on `err` and the loop continues.
    /// Any other error ends the session.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        prompt(out)?;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            // Undecodable bytes become U+FFFD and fail as an unknown command
            let line = String::from_utf8_lossy(&buf);
            match parse_line(&line) {
                Ok(command) => {
                    if command.keyword().is_some() {
                        summary.commands += 1;
                    }
                    if let Flow::Exit = self.execute(command, out)? {
                        break;
                    }
                }
                Err(
                    e @ (ProbeTableError::MalformedCommand { .. }
                    | ProbeTableError::UnrecognizedCommand { .. }),
                ) => {
                    summary.errors += 1;
                    log::debug!("Rejected line {}: {:?}", summary.lines, e);
                    writeln!(err, "Error, {}", e)?;
                }
                Err(e) => return Err(e),
            }
            prompt(out)?;
        }

        log::info!(
            "Session finished: {} lines, {} commands, {} errors, {} users",
            summary.lines,
            summary.commands,
            summary.errors,
            self.network.user_count()
        );
        Ok(summary)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Comment(text) => write!(out, "{}", text)?,
            Command::Blank => {}
            Command::AddUser { first, last, birthdate } => {
                self.network.add_user(&first, &last, &birthdate)?;
            }
            Command::CountUsers => writeln!(out, "{}", self.network.user_count())?,
            Command::Friend(_) | Command::Unfriend(_) | Command::PrintFriends(_) => {
                log::debug!("Ignoring {:?}: friend lists are not tracked", command.keyword());
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, String, SessionSummary) {
        let mut session = Session::new(AmigoNet::new().unwrap());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = session.run(input.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_empty_input_prints_one_prompt() {
        let (out, err, summary) = run("");
        assert_eq!(out, PROMPT);
        assert!(err.is_empty());
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn test_comment_echo() {
        let (out, _, summary) = run("# hello\n");
        assert_eq!(out, "> # hello\n> ");
        assert_eq!(summary.commands, 0);
    }

    #[test]
    fn test_exit_stops_without_prompt() {
        let (out, _, summary) = run("countUsers\nexit\ncountUsers\n");
        assert_eq!(out, "> 0\n> ");
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.commands, 2);
    }

    #[test]
    fn test_errors_reported_and_loop_continues() {
        let (out, err, summary) = run("bogus\naddUser Bad Data notadate\ncountUsers\n");
        assert_eq!(out, "> > > 0\n> ");
        assert_eq!(
            err,
            "Error, illegal command \"bogus\"\nError, invalid arguments for addUser\n"
        );
        assert_eq!(summary.errors, 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut session = Session::new(AmigoNet::new().unwrap());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input: &[u8] =
            b"addUser Jane Doe 01/02/2000\n\xff\xfe bogus\naddUser John Roe 03/04/1999\ncountUsers\n";

        let summary = session.run(input, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "> > > > 2\n> ");
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error, illegal command \""), "{:?}", err);
        assert_eq!(err.lines().count(), 1);
        assert_eq!(summary, SessionSummary { lines: 4, commands: 3, errors: 1 });
        assert_eq!(session.network().user_count(), 2);
    }
}
