#![forbid(unsafe_code)]

//! Clipboard delivery through the host's clipboard utility.
//!
//! The text is piped into an external command (`pbcopy`, `clip`, or one of
//! the X11/Wayland tools). Which utility exists is a property of the host;
//! a host with none gets an error, not a silent no-op.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

#[cfg(target_os = "macos")]
const CANDIDATES: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const CANDIDATES: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy `text` to the system clipboard.
///
/// Candidates are tried in order; a missing binary moves on to the next,
/// any other failure is returned to the caller.
pub fn copy(text: &str) -> io::Result<()> {
    for candidate in CANDIDATES {
        match pipe_through(candidate, text) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            result => return result,
        }
    }

    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "no clipboard utility found on this host",
    ))
}

fn pipe_through(command: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(command[0])
        .args(&command[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} exited with {status}", command[0]),
        ));
    }

    debug!("copied {} bytes via {}", text.len(), command[0]);
    Ok(())
}
