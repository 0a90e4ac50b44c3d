//! AmigoNet command simulator
//!
//! Reads `addUser`, `countUsers`, `friend`, `unfriend`, `printFriends` and
//! `exit` commands line by line and keeps registered users in an
//! [`OpenAddressTable`](crate::hash_map::OpenAddressTable) keyed by full name.
//!
//! ```rust
//! use linprobe::amigonet::{AmigoNet, Session};
//!
//! let mut session = Session::new(AmigoNet::new().unwrap());
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let input = "addUser Jane Doe 01/02/2000\ncountUsers\nexit\n";
//! let summary = session.run(input.as_bytes(), &mut out, &mut err).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "> > 1\n> ");
//! assert_eq!(summary.commands, 3);
//! ```

pub mod command;
mod network;
mod session;

pub use command::{is_birthdate, parse_line, Command};
pub use network::AmigoNet;
pub use session::{Session, SessionSummary, PROMPT};
