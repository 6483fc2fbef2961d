//! Error macros for graphkit

/// Return an invalid-reference error for a node ID
#[macro_export]
macro_rules! bail_invalid_ref {
    ($id:expr) => {
        return Err($crate::error::GraphError::InvalidReference { id: $id })
    };
}

/// Return a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
