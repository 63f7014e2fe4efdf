#![forbid(unsafe_code)]

//! The record derived from one selection: echo, hash, declaration.

use serde::Serialize;

use crate::fnv;

/// Everything one invocation computes. Built once, printed, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub upper: String,
    pub hash: u32,
    pub declaration: String,
}

impl SelectionReport {
    pub fn new(text: &str) -> Self {
        let hash = fnv::selection_hash(text);
        Self {
            upper: text.to_uppercase(),
            hash,
            declaration: const_declaration(text, hash),
        }
    }
}

/// Format a constant declaration embedding `hash`.
///
/// The text is lowercased as-is; whether it makes a valid identifier is the
/// caller's problem.
pub fn const_declaration(text: &str, hash: u32) -> String {
    format!("static const u32 {}_hash = {hash}u;", text.to_lowercase())
}
