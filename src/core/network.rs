use super::description::ModuleDeclaration;
use super::errors::NetworkError;
use super::module::{Module, ModuleKind, ModuleState};
use super::types::ModuleName;
use log::debug;
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

/// Registry of every declared module plus the entry point.
///
/// A `Network` is validated and primed on construction, so every conjunction
/// already knows all of its senders before the first button press.
#[derive(Debug, Clone)]
pub struct Network {
    id: Uuid,
    entry: ModuleName,
    /// Declared modules by name
    modules: HashMap<ModuleName, Module>,
    /// Declaration order, used wherever iteration order is observable
    order: Vec<ModuleName>,
}

impl Network {
    /// Build, validate and prime a network from declarations
    pub fn new(declarations: Vec<ModuleDeclaration>, entry: &str) -> Result<Self, NetworkError> {
        let mut modules = HashMap::new();
        let mut order = Vec::new();

        for decl in declarations {
            if modules.contains_key(&decl.name) {
                return Err(NetworkError::DuplicateModule(decl.name));
            }
            order.push(decl.name.clone());
            let module = Module::new(decl.name.clone(), decl.kind, decl.destinations);
            modules.insert(decl.name, module);
        }

        match modules.get(entry) {
            None => return Err(NetworkError::MissingEntry(entry.to_string())),
            Some(module) if module.kind() != ModuleKind::Broadcaster => {
                return Err(NetworkError::MalformedGraph(format!(
                    "entry '{}' must be a broadcaster, found {:?}",
                    entry,
                    module.kind()
                )));
            }
            Some(_) => {}
        }

        if let Some(extra) = order
            .iter()
            .find(|name| name.as_str() != entry && modules[*name].kind() == ModuleKind::Broadcaster)
        {
            return Err(NetworkError::MalformedGraph(format!(
                "'{}' is a second broadcaster; only the entry '{}' may broadcast",
                extra, entry
            )));
        }

        let mut network = Self {
            id: Uuid::new_v4(),
            entry: entry.to_string(),
            modules,
            order,
        };
        network.prime();

        debug!(
            "Built network {} with {} modules (entry '{}')",
            network.id,
            network.order.len(),
            network.entry
        );
        Ok(network)
    }

    /// Reset every conjunction's memory to low for exactly its declared senders
    pub fn prime(&mut self) {
        for module in self.modules.values_mut() {
            module.clear_memory();
        }

        let edges: Vec<(ModuleName, ModuleName)> = self
            .order
            .iter()
            .flat_map(|name| {
                self.modules[name]
                    .destinations()
                    .iter()
                    .map(move |dest| (name.clone(), dest.clone()))
            })
            .collect();

        for (sender, dest) in edges {
            if let Some(module) = self.modules.get_mut(&dest) {
                module.prime_sender(&sender);
            }
        }
    }

    /// Per-instance identifier, used in log output
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub(crate) fn module_mut(&mut self, name: &str) -> Option<&mut Module> {
        self.modules.get_mut(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Module names in declaration order
    pub fn module_names(&self) -> &[ModuleName] {
        &self.order
    }

    /// Modules that list `name` as a destination, in declaration order
    pub fn senders_to(&self, name: &str) -> Vec<ModuleName> {
        self.order
            .iter()
            .filter(|sender| self.modules[*sender].destinations().iter().any(|d| d == name))
            .cloned()
            .collect()
    }

    /// Destinations that are never declared themselves, in first-seen order
    pub fn sinks(&self) -> Vec<ModuleName> {
        let mut seen = HashSet::new();
        self.order
            .iter()
            .flat_map(|name| self.modules[name].destinations())
            .filter(|dest| !self.is_declared(dest))
            .filter(|dest| seen.insert(dest.as_str()))
            .cloned()
            .collect()
    }

    /// Snapshot of every module's state, ordered by name
    pub fn module_states(&self) -> BTreeMap<ModuleName, ModuleState> {
        self.modules
            .iter()
            .map(|(name, module)| (name.clone(), module.state().clone()))
            .collect()
    }

    pub fn stats(&self) -> NetworkStats {
        let count = |kind: ModuleKind| self.modules.values().filter(|m| m.kind() == kind).count();

        NetworkStats {
            total_modules: self.module_names().len(),
            flip_flops: count(ModuleKind::FlipFlop),
            conjunctions: count(ModuleKind::Conjunction),
            broadcasters: count(ModuleKind::Broadcaster),
            total_edges: self.modules.values().map(|m| m.destinations().len()).sum(),
            sinks: self.sinks().len(),
        }
    }
}

/// Statistics about the network layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStats {
    pub total_modules: usize,
    pub flip_flops: usize,
    pub conjunctions: usize,
    pub broadcasters: usize,
    pub total_edges: usize,
    pub sinks: usize,
}
