//! Textual network descriptions.
//!
//! Each non-blank line declares one module:
//!
//! ```text
//! broadcaster -> a, b, c
//! %a -> b
//! &inv -> a
//! ```
//!
//! No sigil declares a broadcaster, `%` a flip-flop and `&` a conjunction.

use super::errors::NetworkError;
use super::module::ModuleKind;
use super::types::ModuleName;
use serde::{Deserialize, Serialize};

/// One declared module: its name, kind and ordered destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    pub name: ModuleName,
    pub kind: ModuleKind,
    pub destinations: Vec<ModuleName>,
}

impl ModuleDeclaration {
    pub fn new(name: impl Into<ModuleName>, kind: ModuleKind, destinations: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind,
            destinations: destinations.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ModuleDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} -> {}",
            self.kind.sigil(),
            self.name,
            self.destinations.join(", ")
        )
    }
}

/// Parse a whole description, skipping blank lines
pub fn parse_description(text: &str) -> Result<Vec<ModuleDeclaration>, NetworkError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_declaration(line, index + 1))
        .collect()
}

/// Parse a single declaration; `line` is only used for error reporting
pub fn parse_declaration(text: &str, line: usize) -> Result<ModuleDeclaration, NetworkError> {
    let malformed = |reason: &str| NetworkError::MalformedDeclaration {
        line,
        reason: reason.to_string(),
    };

    let (head, tail) = text
        .split_once("->")
        .ok_or_else(|| malformed("missing '->'"))?;

    let head = head.trim();
    let (kind, name) = if let Some(name) = head.strip_prefix('%') {
        (ModuleKind::FlipFlop, name)
    } else if let Some(name) = head.strip_prefix('&') {
        (ModuleKind::Conjunction, name)
    } else {
        (ModuleKind::Broadcaster, head)
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("empty module name"));
    }

    let destinations: Vec<ModuleName> = tail.split(',').map(|d| d.trim().to_string()).collect();
    if destinations.iter().any(|d| d.is_empty()) {
        return Err(malformed("empty destination"));
    }

    Ok(ModuleDeclaration {
        name: name.to_string(),
        kind,
        destinations,
    })
}
