use crate::{MAX_ACCOUNT_ID_LEN, MIN_ACCOUNT_ID_LEN};
use concordium_std::*;
use core::fmt;

/// Name of a ledger account, e.g. `auction.factory.testnet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the name fits the ledger's account length bounds.
    pub fn has_valid_len(&self) -> bool {
        (MIN_ACCOUNT_ID_LEN..=MAX_ACCOUNT_ID_LEN).contains(&self.len())
    }

    /// Builds `<prefix>.<self>`. The result is not validated.
    pub fn sub_account(&self, prefix: &str) -> AccountId {
        AccountId(format!("{}.{}", prefix, self.0))
    }
}

impl From<&str> for AccountId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Serial for AccountId {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        self.0.serial(out)
    }
}

impl Deserial for AccountId {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        String::deserial(source).map(AccountId)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_sub_account_length_bounds() {
        let factory = AccountId::from("factory.testnet");
        let short = factory.sub_account("a");
        assert_eq!(short.as_str(), "a.factory.testnet");
        claim!(short.has_valid_len());

        // 48 + 1 + 15 = 64 bytes: still acceptable
        claim!(factory.sub_account(&"x".repeat(48)).has_valid_len());
        // 49 + 1 + 15 = 65 bytes: one too many
        claim!(!factory.sub_account(&"x".repeat(49)).has_valid_len());

        claim!(!AccountId::from("a").has_valid_len());
    }
}
