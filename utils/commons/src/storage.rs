use crate::{ContractResult, CustomContractError, STATE_KEY};
use concordium_std::{collections::BTreeMap, *};

/// Persistent key/value storage of one contract instance.
pub trait HasStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn write(&mut self, key: &[u8], value: Vec<u8>);

    fn contains(&self, key: &[u8]) -> bool {
        self.read(key).is_some()
    }
}

/// In-memory storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasStorage for MemoryStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }
}

/// Read the state record.
pub fn load_state<S: Deserial>(storage: &impl HasStorage) -> ContractResult<S> {
    let bytes = storage
        .read(STATE_KEY)
        .ok_or(CustomContractError::NotInitialized)?;
    from_bytes(&bytes).map_err(|_| CustomContractError::InvalidState)
}

/// Store the state record produced by a constructor. A contract is
/// constructed once.
pub fn init_state<S: Serial>(storage: &mut impl HasStorage, state: &S) -> ContractResult<()> {
    ensure!(
        !storage.contains(STATE_KEY),
        CustomContractError::AlreadyInitialized
    );
    storage.write(STATE_KEY, to_bytes(state));
    Ok(())
}

/// Run `f` against the state record and write it back only if `f` succeeds.
///
/// A rejected call therefore never leaves a partial update behind.
pub fn with_state_mut<S, R>(
    storage: &mut impl HasStorage,
    f: impl FnOnce(&mut S) -> ContractResult<R>,
) -> ContractResult<R>
where
    S: Serial + Deserial,
{
    let mut state: S = load_state(storage)?;
    let result = f(&mut state)?;
    storage.write(STATE_KEY, to_bytes(&state));
    Ok(result)
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_state_is_written_back_only_on_success() {
        let mut storage = MemoryStorage::new();
        assert_eq!(
            load_state::<u64>(&storage),
            Err(CustomContractError::NotInitialized)
        );

        init_state(&mut storage, &1u64).expect("First init should work");
        assert_eq!(
            init_state(&mut storage, &2u64),
            Err(CustomContractError::AlreadyInitialized)
        );

        let res = with_state_mut(&mut storage, |counter: &mut u64| {
            *counter += 10;
            Err::<(), _>(CustomContractError::BidTooLow)
        });
        assert_eq!(res, Err(CustomContractError::BidTooLow));
        assert_eq!(load_state::<u64>(&storage), Ok(1));

        with_state_mut(&mut storage, |counter: &mut u64| {
            *counter += 10;
            Ok(())
        })
        .expect("Update should work");
        assert_eq!(load_state::<u64>(&storage), Ok(11));
    }

    #[concordium_test]
    fn test_undecodable_record_is_invalid_state() {
        let mut storage = MemoryStorage::new();
        storage.write(STATE_KEY, vec![1, 2]);
        assert_eq!(
            load_state::<u64>(&storage),
            Err(CustomContractError::InvalidState)
        );
    }
}
