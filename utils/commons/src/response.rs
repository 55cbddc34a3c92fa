use crate::{Actions, ContractResult};
use concordium_std::*;

/// What a dispatched call hands back to the host: the serialized return
/// value and the effects to execute once the state has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub return_value: Vec<u8>,
    pub actions: Actions,
}

impl Response {
    /// Nothing returned, nothing to execute.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_value<V: Serial>(value: &V) -> Self {
        Self {
            return_value: to_bytes(value),
            actions: Actions::accept(),
        }
    }

    pub fn with_actions(actions: Actions) -> Self {
        Self {
            return_value: Vec::new(),
            actions,
        }
    }

    /// Decode the return value as `V`.
    pub fn value<V: Deserial>(&self) -> ParseResult<V> {
        from_bytes(&self.return_value)
    }
}

/// Decode the parameter of a call.
pub fn parse_params<P: Deserial>(parameter: &[u8]) -> ContractResult<P> {
    Ok(from_bytes(parameter)?)
}
