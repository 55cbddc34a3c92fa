use crate::{MAX_LOG_SIZE, MAX_NUM_LOGS};
use concordium_std::*;

/// Event sink of a single call.
///
/// Holds the serialized events in the order they were logged and enforces the
/// same limits the chain does.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventLog {
    pub logs: Vec<Vec<u8>>,
}

impl EventLog {
    /// Decode every logged event as `E`.
    pub fn events<E: Deserial>(&self) -> ParseResult<Vec<E>> {
        self.logs.iter().map(|log| from_bytes(log)).collect()
    }
}

impl HasLogger for EventLog {
    fn init() -> Self {
        Self::default()
    }

    fn log_raw(&mut self, event: &[u8]) -> Result<(), LogError> {
        if event.len() > MAX_LOG_SIZE {
            return Err(LogError::Malformed);
        }
        if self.logs.len() >= MAX_NUM_LOGS {
            return Err(LogError::Full);
        }
        self.logs.push(event.to_vec());
        Ok(())
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_log_limits() {
        let mut logger = EventLog::init();
        assert_eq!(
            logger.log_raw(&[0u8; MAX_LOG_SIZE + 1]),
            Err(LogError::Malformed)
        );
        for _ in 0..MAX_NUM_LOGS {
            logger.log(&1u8).expect("Logging within limits should work");
        }
        assert_eq!(logger.log(&1u8), Err(LogError::Full));
        assert_eq!(logger.events::<u8>(), Ok(vec![1u8; MAX_NUM_LOGS]));
    }
}
