//! Packets travelling the token ring.

use crate::node::Node;
use std::io::{self, Write};

/// Payload carried by every broadcast packet.
pub const BROADCAST: &str = "BROADCAST";

const POSTSCRIPT_MAGIC: &str = "!PS";

/// An in-flight message, consumed by exactly one traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    /// Document contents, or [`BROADCAST`].
    pub payload: String,
    /// Name of the originating node.
    pub origin: String,
    /// Name of the node the packet is meant for.
    pub destination: String,
}

impl Packet {
    pub fn new(
        payload: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            payload: payload.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// A broadcast packet travels from `origin` back to itself.
    pub fn broadcast(origin: &str) -> Self {
        Self::new(BROADCAST, origin, origin)
    }

    pub fn is_broadcast(&self) -> bool {
        self.payload == BROADCAST && self.origin == self.destination
    }

    /// Hand the packet to `at` for printing.
    ///
    /// Writes the accounting line and the delivery line when `at` is the
    /// printer named by `destination` and returns `true`; otherwise writes a
    /// cancellation line and returns `false`. Sink failures do not change the
    /// result.
    pub fn print<W: Write + ?Sized>(&self, at: &Node, sink: &mut W) -> bool {
        let delivered = at.is_printer() && at.matches_name(&self.destination);
        let written = if delivered {
            self.write_accounting(sink)
        } else if at.is_printer() {
            sink.write_all(b">>> Printer is not the destination, print job cancelled.\n\n")
                .and_then(|()| sink.flush())
        } else {
            sink.write_all(b">>> Destinition is not a printer, print job cancelled.\n\n")
                .and_then(|()| sink.flush())
        };

        if let Err(err) = written {
            tracing::debug!(%err, printer = %at.name, "ignoring trace sink failure");
        }
        delivered
    }

    fn write_accounting<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let job = Accounting::of(&self.payload);
        writeln!(
            sink,
            "\tAccounting -- author = '{}' -- title = '{}'",
            job.author, job.title
        )?;
        if job.postscript {
            sink.write_all(b">>> Postscript job delivered.\n\n")?;
        } else {
            sink.write_all(b">>> ASCII Print job delivered.\n\n")?;
        }
        sink.flush()
    }
}

/// Author and title extracted from a document for the printer's log.
#[derive(Debug, PartialEq, Eq)]
struct Accounting<'a> {
    author: &'a str,
    title: &'a str,
    postscript: bool,
}

impl<'a> Accounting<'a> {
    fn of(document: &'a str) -> Self {
        if document.starts_with(POSTSCRIPT_MAGIC) {
            Self {
                author: field(document, "author:").unwrap_or("Unknown"),
                title: field(document, "title:").unwrap_or("Untitled"),
                postscript: true,
            }
        } else {
            Self {
                author: ascii_author(document).unwrap_or("Unknown"),
                title: "ASCII DOCUMENT",
                postscript: false,
            }
        }
    }
}

/// Text after `key` up to the next `.`, or to the end of the document.
fn field<'a>(document: &'a str, key: &str) -> Option<&'a str> {
    let start = document.find(key)? + key.len();
    let rest = &document[start..];
    Some(rest.find('.').map_or(rest, |end| &rest[..end]))
}

/// ASCII documents carry their author in characters 8 to 16.
fn ascii_author(document: &str) -> Option<&str> {
    let mut bounds = document.char_indices().map(|(i, _)| i).chain([document.len()]);
    let start = bounds.nth(8)?;
    let end = bounds.nth(7)?;
    Some(&document[start..end])
}
