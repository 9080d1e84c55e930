//! Commit object
//!
//! A commit freezes the staged entries together with a message and the time
//! it was made. It has no parent: every commit stands alone.
//!
//! ## Format (version 1)
//!
//! ```text
//! tree
//! <path> <digest>
//! ...
//! message: <message>
//! date: <yyyy-mm-dd HH:MM:SS>
//! ```
//!
//! There is no newline after the date. The message may span several lines.
//! The last `date: ` line is the timestamp. Tree entries are read for as long
//! as lines parse as `<path> <digest>`, so a path may itself start with
//! `message: `; the message opens at the last `message: ` line among them or
//! right after them.

use crate::COMMIT_DATE_ENV;
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use chrono::NaiveDateTime;
use derive_new::new;
use std::io::{BufRead, Write};

/// Timestamp layout inside the payload
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MESSAGE_PREFIX: &str = "message: ";
const DATE_PREFIX: &str = "date: ";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    tree: Tree,
    message: String,
    timestamp: NaiveDateTime,
}

impl Commit {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    /// Commit time at second resolution
    ///
    /// Reads `BITLET_COMMIT_DATE` when it holds a valid date, otherwise the
    /// local clock.
    pub fn timestamp_now() -> NaiveDateTime {
        let pinned = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date| NaiveDateTime::parse_from_str(date.trim(), DATE_FORMAT).ok());

        match pinned {
            Some(timestamp) => timestamp,
            None => {
                let now = chrono::Local::now().naive_local();
                // drop sub-second precision so the payload and the parsed value agree
                NaiveDateTime::parse_from_str(&now.format(DATE_FORMAT).to_string(), DATE_FORMAT)
                    .unwrap_or(now)
            }
        }
    }

    fn malformed(reason: &str) -> anyhow::Error {
        RepositoryError::MalformedCommit(reason.to_string()).into()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut commit_bytes = Vec::new();

        commit_bytes.write_all(&self.tree.serialize()?)?;
        writeln!(commit_bytes, "{}{}", MESSAGE_PREFIX, self.message)?;
        write!(commit_bytes, "{}{}", DATE_PREFIX, self.readable_timestamp())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|_| Self::malformed("payload is not valid UTF-8"))?;

        let (head, date) = content
            .rsplit_once(&format!("\n{}", DATE_PREFIX))
            .ok_or_else(|| Self::malformed("missing date line"))?;
        let timestamp = NaiveDateTime::parse_from_str(date.trim_end(), DATE_FORMAT)
            .map_err(|_| Self::malformed(&format!("invalid date {:?}", date)))?;

        let lines = head.split('\n').collect::<Vec<_>>();

        // paths may start with the message prefix themselves, so the message
        // opens at the last prefixed line still reachable through tree entries
        let listed = lines
            .iter()
            .skip(1)
            .take_while(|line| IndexEntry::try_from(**line).is_ok())
            .count();
        let message_line = (1..=listed + 1)
            .rev()
            .find(|&i| lines.get(i).is_some_and(|line| line.starts_with(MESSAGE_PREFIX)))
            .ok_or_else(|| Self::malformed("missing message line"))?;

        let tree = Tree::parse(lines[..message_line].iter().copied())?;
        let message = lines[message_line..].join("\n")[MESSAGE_PREFIX.len()..].to_string();

        Ok(Commit::new(tree, message, timestamp))
    }
}

impl Object for Commit {}
