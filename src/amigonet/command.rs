//! Parsing of simulator input lines

use crate::error::{ProbeTableError, Result};

/// Register a user: `addUser <first> <last> <DD/MM/YYYY>`
pub const ADD_USER: &str = "addUser";
/// Print the number of registered users
pub const COUNT_USERS: &str = "countUsers";
/// Friend two users (accepted, no effect)
pub const FRIEND: &str = "friend";
/// Unfriend two users (accepted, no effect)
pub const UNFRIEND: &str = "unfriend";
/// Print a user's friends (accepted, no effect)
pub const PRINT_FRIENDS: &str = "printFriends";
/// Stop reading input
pub const EXIT: &str = "exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Line starting with `#`, kept verbatim for echoing
    Comment(String),
    /// Line without any token
    Blank,
    /// Register `first last` with a birthdate
    AddUser {
        /// First name
        first: String,
        /// Last name
        last: String,
        /// Birthdate token, `/` at positions 2 and 5
        birthdate: String,
    },
    /// Print the user count
    CountUsers,
    /// `friend` with its raw arguments
    Friend(Vec<String>),
    /// `unfriend` with its raw arguments
    Unfriend(Vec<String>),
    /// `printFriends` with its raw arguments
    PrintFriends(Vec<String>),
    /// End of session
    Exit,
}

impl Command {
    /// Command keyword, `None` for comments and blank lines
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Comment(_) | Command::Blank => None,
            Command::AddUser { .. } => Some(ADD_USER),
            Command::CountUsers => Some(COUNT_USERS),
            Command::Friend(_) => Some(FRIEND),
            Command::Unfriend(_) => Some(UNFRIEND),
            Command::PrintFriends(_) => Some(PRINT_FRIENDS),
            Command::Exit => Some(EXIT),
        }
    }
}

/// Check the `DD/MM/YYYY` shape: separators at byte positions 2 and 5
pub fn is_birthdate(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.get(2) == Some(&b'/') && bytes.get(5) == Some(&b'/')
}

/// Parse one input line
///
/// Extra tokens after the expected arguments are ignored.
pub fn parse_line(line: &str) -> Result<Command> {
    if line.starts_with('#') {
        return Ok(Command::Comment(line.to_string()));
    }

    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(Command::Blank);
    };

    match keyword {
        ADD_USER => {
            let (first, last, birthdate) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(first), Some(last), Some(birthdate)) => (first, last, birthdate),
                _ => {
                    return Err(ProbeTableError::malformed_command(
                        ADD_USER,
                        "expected <first> <last> <birthdate>",
                    ))
                }
            };
            if !is_birthdate(birthdate) {
                return Err(ProbeTableError::malformed_command(
                    ADD_USER,
                    format!("birthdate {:?} is not DD/MM/YYYY", birthdate),
                ));
            }
            Ok(Command::AddUser {
                first: first.to_string(),
                last: last.to_string(),
                birthdate: birthdate.to_string(),
            })
        }
        COUNT_USERS => Ok(Command::CountUsers),
        FRIEND => Ok(Command::Friend(tokens.map(str::to_string).collect())),
        UNFRIEND => Ok(Command::Unfriend(tokens.map(str::to_string).collect())),
        PRINT_FRIENDS => Ok(Command::PrintFriends(tokens.map(str::to_string).collect())),
        EXIT => Ok(Command::Exit),
        other => Err(ProbeTableError::unrecognized_command(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_user() {
        assert_eq!(
            parse_line("addUser Jane Doe 01/02/2000\n").unwrap(),
            Command::AddUser {
                first: "Jane".to_string(),
                last: "Doe".to_string(),
                birthdate: "01/02/2000".to_string(),
            }
        );
    }

    #[test]
    fn test_add_user_malformed() {
        for line in [
            "addUser Bad Data notadate",
            "addUser Jane Doe",
            "addUser",
            "addUser Jane Doe 1/2/2000",
        ] {
            let err = parse_line(line).unwrap_err();
            assert!(
                matches!(err, ProbeTableError::MalformedCommand { ref command, .. } if command == ADD_USER),
                "{:?} parsed",
                line
            );
        }
    }

    #[test]
    fn test_add_user_ignores_extra_tokens() {
        let command = parse_line("addUser Jane Doe 01/02/2000 trailing").unwrap();
        assert_eq!(command.keyword(), Some(ADD_USER));
    }

    #[test]
    fn test_birthdate_shape() {
        assert!(is_birthdate("31/12/1999"));
        assert!(is_birthdate("ab/cd/efgh"));
        assert!(!is_birthdate("31-12-1999"));
        assert!(!is_birthdate("31/"));
        assert!(!is_birthdate(""));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(
            parse_line("# a comment\n").unwrap(),
            Command::Comment("# a comment\n".to_string())
        );
        assert_eq!(parse_line("\n").unwrap(), Command::Blank);
        assert_eq!(parse_line("   ").unwrap(), Command::Blank);
        // Only a leading # makes a comment
        assert!(parse_line(" # not a comment").is_err());
    }

    #[test]
    fn test_friend_commands_keep_arguments() {
        assert_eq!(
            parse_line("friend Jane 01/02/2000 John 03/04/2001").unwrap(),
            Command::Friend(vec![
                "Jane".to_string(),
                "01/02/2000".to_string(),
                "John".to_string(),
                "03/04/2001".to_string(),
            ])
        );
        assert_eq!(parse_line("unfriend").unwrap(), Command::Unfriend(Vec::new()));
        assert_eq!(parse_line("printFriends Jane 01/02/2000").unwrap().keyword(), Some(PRINT_FRIENDS));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_line("countUsers\n").unwrap(), Command::CountUsers);
        assert_eq!(parse_line("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_unrecognized() {
        let err = parse_line("deleteUser Jane Doe").unwrap_err();
        assert!(matches!(err, ProbeTableError::UnrecognizedCommand { ref command } if command == "deleteUser"));
        assert_eq!(err.to_string(), "illegal command \"deleteUser\"");
    }
}
