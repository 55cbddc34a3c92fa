use super::*;

/// The contract state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct State {
    /// Code deployed to every new auction.
    pub code: Vec<u8>,
}

/// Type of the parameter to the `init` function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FactoryInitParams {
    pub code: Vec<u8>,
}

/// Type of the parameter to the `deploy_new_auction` function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeployParams {
    /// Prefix of the new account, which becomes `<name>.<factory>`.
    pub name: String,
    /// Forwarded unchanged to the `init` of the new auction.
    pub auction: AuctionInitParams,
}

/// Intent of one deployment, handed to the callback as its argument.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeployCallbackParams {
    /// Account the auction was deployed to.
    pub account: AccountId,
    /// Account that paid for the deployment.
    pub user: AccountId,
    /// Full deposit of the deployment request.
    pub attached: U128,
}

/// Type of the parameter to the `update_auction_contract` function.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpdateCodeParams {
    /// New code, base64 encoded.
    pub code: String,
}

/// How a deployment ended, as seen by the callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStatus {
    Confirmed,
    /// The deployment failed; carries the refund of the depositor.
    RollbackIssued(Actions),
}

impl DeploymentStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DeploymentStatus::Confirmed)
    }

    pub fn into_actions(self) -> Actions {
        match self {
            DeploymentStatus::Confirmed => Actions::accept(),
            DeploymentStatus::RollbackIssued(actions) => actions,
        }
    }
}
