use crate::core::description::{parse_description, ModuleDeclaration};
use crate::core::errors::NetworkError;
use crate::core::module::ModuleKind;
use crate::core::network::Network;
use crate::core::types::{ModuleName, BROADCASTER};

/// Imperative API for declaring modules and wiring them into a network
///
/// Declarations are collected in order; validation and priming happen in
/// [`NetworkBuilder::build`].
#[derive(Debug)]
pub struct NetworkBuilder {
    declarations: Vec<ModuleDeclaration>,
    entry: ModuleName,
}

impl NetworkBuilder {
    /// Create a new builder with the default entry point
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            entry: BROADCASTER.to_string(),
        }
    }

    /// Start from a textual description
    pub fn from_description(text: &str) -> Result<Self, NetworkError> {
        let mut builder = Self::new();
        builder.declarations(parse_description(text)?);
        Ok(builder)
    }

    /// Use a different entry point name
    pub fn entry(&mut self, name: &str) -> &mut Self {
        self.entry = name.to_string();
        self
    }

    /// Declare the entry broadcaster
    pub fn broadcaster(&mut self, destinations: &[&str]) -> &mut Self {
        let entry = self.entry.clone();
        self.declare(ModuleDeclaration::new(entry, ModuleKind::Broadcaster, destinations))
    }

    pub fn flip_flop(&mut self, name: &str, destinations: &[&str]) -> &mut Self {
        self.declare(ModuleDeclaration::new(name, ModuleKind::FlipFlop, destinations))
    }

    pub fn conjunction(&mut self, name: &str, destinations: &[&str]) -> &mut Self {
        self.declare(ModuleDeclaration::new(name, ModuleKind::Conjunction, destinations))
    }

    pub fn declare(&mut self, declaration: ModuleDeclaration) -> &mut Self {
        self.declarations.push(declaration);
        self
    }

    pub fn declarations<I: IntoIterator<Item = ModuleDeclaration>>(&mut self, declarations: I) -> &mut Self {
        self.declarations.extend(declarations);
        self
    }

    /// Append an edge to an already declared module
    pub fn connect(&mut self, source: &str, destination: &str) -> Result<&mut Self, NetworkError> {
        let decl = self
            .declarations
            .iter_mut()
            .find(|d| d.name == source)
            .ok_or_else(|| {
                NetworkError::InvalidOperation(format!("Source module '{}' not declared", source))
            })?;
        decl.destinations.push(destination.to_string());
        Ok(self)
    }

    /// Names declared so far, in order
    pub fn declared_names(&self) -> Vec<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }

    /// Validate, prime and return the network
    pub fn build(&self) -> Result<Network, NetworkError> {
        Network::new(self.declarations.clone(), &self.entry)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
