use super::*;

/// An untagged event of a deployment request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeployRequestedEvent {
    pub account: AccountId,
    pub user: AccountId,
    pub attached: U128,
}

/// An untagged event of a failed deployment and its refund.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeployRolledBackEvent {
    pub account: AccountId,
    /// Account the deposit is returned to.
    pub user: AccountId,
    pub refund: U128,
}

/// Tagged factory event to be serialized for the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryEvent {
    DeployRequested(DeployRequestedEvent),
    /// Deployment to the account succeeded.
    DeployConfirmed(AccountId),
    DeployRolledBack(DeployRolledBackEvent),
    /// Code template replaced, carries its new size in bytes.
    CodeUpdated(u64),
}

impl Serial for FactoryEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            FactoryEvent::DeployRequested(event) => {
                out.write_u8(DEPLOY_REQUESTED_TAG)?;
                event.serial(out)
            }
            FactoryEvent::DeployConfirmed(account) => {
                out.write_u8(DEPLOY_CONFIRMED_TAG)?;
                account.serial(out)
            }
            FactoryEvent::DeployRolledBack(event) => {
                out.write_u8(DEPLOY_ROLLED_BACK_TAG)?;
                event.serial(out)
            }
            FactoryEvent::CodeUpdated(size) => {
                out.write_u8(CODE_UPDATED_TAG)?;
                size.serial(out)
            }
        }
    }
}

impl Deserial for FactoryEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            DEPLOY_REQUESTED_TAG => {
                DeployRequestedEvent::deserial(source).map(FactoryEvent::DeployRequested)
            }
            DEPLOY_CONFIRMED_TAG => AccountId::deserial(source).map(FactoryEvent::DeployConfirmed),
            DEPLOY_ROLLED_BACK_TAG => {
                DeployRolledBackEvent::deserial(source).map(FactoryEvent::DeployRolledBack)
            }
            CODE_UPDATED_TAG => u64::deserial(source).map(FactoryEvent::CodeUpdated),
            _ => Err(ParseError::default()),
        }
    }
}
