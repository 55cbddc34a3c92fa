use crate::CustomContractError;

/// Both contracts reject with the same error enum.
pub type ContractError = CustomContractError;

pub type ContractResult<A> = Result<A, ContractError>;
