use concordium_std::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Reject)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Attempt to call function on an uninitialized contract (Error code: -4).
    NotInitialized,
    /// Contract was already initialized (Error code: -5).
    AlreadyInitialized,
    /// Stored state could not be decoded or holds a malformed amount
    /// (Error code: -6).
    InvalidState,
    /// Amount is not a decimal amount (Error code: -7).
    InvalidAmount,
    /// Account name is outside the allowed length (Error code: -8).
    InvalidName,
    /// Contract code payload could not be decoded (Error code: -9).
    InvalidCode,
    /// Unauthorized (Error code: -10).
    Unauthorized,
    /// Payment came from a token contract other than the configured one
    /// (Error code: -11).
    UnauthorizedAsset,
    /// Auction does not accept this way of paying (Error code: -12).
    UnsupportedMedium,
    /// Method is not exposed by the contract (Error code: -13).
    UnknownMethod,
    /// Raised if a bid is placed at or after the auction end (Error code: -14).
    AuctionEnded,
    /// Raised if there is an attempt to claim the auction before its end
    /// (Error code: -15).
    AuctionStillActive,
    /// Auction was already claimed (Error code: -16).
    AlreadyClaimed,
    /// Raised if bid is not higher than the highest bid (Error code: -17).
    BidTooLow,
    /// Attached deposit does not cover the deployment (Error code: -18).
    InsufficientDeposit,
    /// Arithmetic overflow (Error code: -19).
    Overflow,
}

/// Broad classes of rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, malformed state or a caller without rights.
    Validation,
    /// Business rule rejection; retrying with different input may succeed.
    State,
    /// Overflow while computing an amount.
    Arithmetic,
}

impl CustomContractError {
    pub fn kind(&self) -> ErrorKind {
        use CustomContractError::*;
        match self {
            AuctionEnded | AuctionStillActive | AlreadyClaimed | BidTooLow
            | InsufficientDeposit => ErrorKind::State,
            Overflow => ErrorKind::Arithmetic,
            ParseParams | LogFull | LogMalformed | NotInitialized | AlreadyInitialized
            | InvalidState | InvalidAmount | InvalidName | InvalidCode | Unauthorized
            | UnauthorizedAsset | UnsupportedMedium | UnknownMethod => ErrorKind::Validation,
        }
    }
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_error_codes_follow_declaration_order() {
        let reject: Reject = CustomContractError::ParseParams.into();
        assert_eq!(reject.error_code.get(), -1);
        let reject: Reject = CustomContractError::BidTooLow.into();
        assert_eq!(reject.error_code.get(), -17);
    }

    #[concordium_test]
    fn test_error_kinds() {
        assert_eq!(CustomContractError::BidTooLow.kind(), ErrorKind::State);
        assert_eq!(CustomContractError::Overflow.kind(), ErrorKind::Arithmetic);
        assert_eq!(
            CustomContractError::UnauthorizedAsset.kind(),
            ErrorKind::Validation
        );
    }
}
