use super::types::ModuleName;

/// Errors raised while building, priming or driving a pulse network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A conjunction received a pulse from a sender it was never primed with
    UnprimedSender { module: ModuleName, sender: ModuleName },
    /// The same module name was declared more than once
    DuplicateModule(ModuleName),
    /// The entry point module was never declared
    MissingEntry(ModuleName),
    /// Structural problem with the declared graph
    MalformedGraph(String),
    /// A description line could not be parsed (1-based line number)
    MalformedDeclaration { line: usize, reason: String },
    /// Nothing sends to the target module
    UnreachableTarget(ModuleName),
    /// The target is not fed by a single conjunction
    UnsupportedTopology(String),
    /// A branch fired a second time at something other than twice its first press
    AperiodicBranch { branch: ModuleName, first: u64, second: u64 },
    /// A branch fired and its high into the hub was still the last pulse it sent that press
    LatchedBranch { branch: ModuleName, press: u64 },
    /// Low and high totals are too large to multiply
    CountOverflow { low: u64, high: u64 },
    /// A detection loop ran out of presses
    PressLimitExceeded { limit: u64 },
    /// The combined period does not fit in a u64
    PeriodOverflow,
    /// Invalid operation on the current state
    InvalidOperation(String),
    /// Invalid configuration value
    Config(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::UnprimedSender { module, sender } => write!(
                f,
                "Conjunction '{}' received a pulse from unprimed sender '{}'",
                module, sender
            ),
            NetworkError::DuplicateModule(name) => {
                write!(f, "Module '{}' is declared more than once", name)
            }
            NetworkError::MissingEntry(name) => {
                write!(f, "Entry module '{}' is not declared", name)
            }
            NetworkError::MalformedGraph(msg) => write!(f, "Malformed graph: {}", msg),
            NetworkError::MalformedDeclaration { line, reason } => {
                write!(f, "Malformed declaration on line {}: {}", line, reason)
            }
            NetworkError::UnreachableTarget(name) => {
                write!(f, "No module sends to target '{}'", name)
            }
            NetworkError::UnsupportedTopology(msg) => write!(f, "Unsupported topology: {}", msg),
            NetworkError::AperiodicBranch {
                branch,
                first,
                second,
            } => write!(
                f,
                "Branch '{}' fired at presses {} and {}, which is not a clean period",
                branch, first, second
            ),
            NetworkError::LatchedBranch { branch, press } => write!(
                f,
                "Branch '{}' fired on press {} and stayed high into the hub",
                branch, press
            ),
            NetworkError::CountOverflow { low, high } => write!(
                f,
                "Product of {} low and {} high pulses overflows u64",
                low, high
            ),
            NetworkError::PressLimitExceeded { limit } => {
                write!(f, "Press limit of {} reached before detection finished", limit)
            }
            NetworkError::PeriodOverflow => write!(f, "Combined branch period overflows u64"),
            NetworkError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            NetworkError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<NetworkError> for String {
    fn from(error: NetworkError) -> Self {
        error.to_string()
    }
}
