use std::fmt;

/// Graph store and structural transform errors.
///
/// Every variant is a validation failure: the operation rejects before
/// mutating, and the caller's graph value is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The named node is not present in the graph.
    NodeNotFound(String),

    /// An edge with this (source, target) pair already exists.
    DuplicateEdge { source: String, target: String },

    /// Inserting the edge would close a directed cycle.
    WouldCreateCycle { source: String, target: String },

    /// A new node's id is already in use.
    NodeIdCollision(String),

    /// Condensation needs at least two nodes.
    SelectionTooSmall { required: usize, actual: usize },

    /// An expansion proposal must contain at least one node.
    EmptyExpansion,

    /// A transform would have produced a cyclic graph.
    CycleDetected,
}

// Display is hand-written (rather than derived via `thiserror::Error`)
// because several variants carry a field literally named `source`, which
// thiserror unconditionally treats as an `Error` source — a `String` there
// does not implement `std::error::Error`. The messages below reproduce the
// original `#[error(...)]` formats exactly.
impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => write!(f, "node not found: {id}"),
            GraphError::DuplicateEdge { source, target } => {
                write!(f, "duplicate edge: {source} -> {target}")
            }
            GraphError::WouldCreateCycle { source, target } => {
                write!(f, "edge {source} -> {target} would create a cycle")
            }
            GraphError::NodeIdCollision(id) => write!(f, "node id already in use: {id}"),
            GraphError::SelectionTooSmall { required, actual } => write!(
                f,
                "condensation requires at least {required} nodes, got {actual}"
            ),
            GraphError::EmptyExpansion => write!(f, "expansion proposal contains no nodes"),
            GraphError::CycleDetected => {
                write!(f, "transform rejected: result would contain a cycle")
            }
        }
    }
}

impl std::error::Error for GraphError {}
