use std::fmt;

/// Rejected selections and configuration. A search that simply finds no route
/// is not an error; it is reported as `None` or `RouteOutcome::Blocked`.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    UnknownLabel { name: String },
    OutOfBounds { row: usize, col: usize },
    FloorOutOfRange { floor: usize },
    InvalidConfig { reason: String },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabel { name } => write!(f, "no room labeled '{name}' on this floor"),
            Self::OutOfBounds { row, col } => write!(f, "cell ({row},{col}) is outside the floor"),
            Self::FloorOutOfRange { floor } => write!(f, "floor {floor} does not exist"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for RoutingError {}
