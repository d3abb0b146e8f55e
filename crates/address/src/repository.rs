use crate::dataset::seed_records;
use crate::error::AddressError;
use crate::record::AddressRecord;

/// In-memory store of address records.
///
/// Records keep insertion order. Lookups are linear scans; there is no index
/// and no interior locking. Callers that share a repository across tasks wrap
/// it in a lock of their choosing.
#[derive(Debug, Clone, Default)]
pub struct AddressRepository {
    records: Vec<AddressRecord>,
}

impl AddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the bundled dataset.
    pub fn with_seed_data() -> Result<Self, AddressError> {
        let mut repo = Self::new();
        repo.seed()?;
        Ok(repo)
    }

    /// Append a record as-is. Uniqueness of `record.id` is the caller's concern.
    pub fn insert(&mut self, record: AddressRecord) {
        tracing::debug!(id = record.id, cep = %record.cep, "inserting address");
        self.records.push(record);
    }

    /// Every stored record, in insertion order.
    pub fn fetch_all(&self) -> &[AddressRecord] {
        &self.records
    }

    /// First record whose identifier equals `id`.
    pub fn get_by_id(&self, id: u64) -> Option<&AddressRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records with a non-empty postal code, in insertion order.
    pub fn available(&self) -> Vec<AddressRecord> {
        self.records
            .iter()
            .filter(|record| record.is_available())
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier the next created record receives: the current record count.
    pub fn next_id(&self) -> u64 {
        self.records.len() as u64
    }

    /// Replace the contents with the bundled dataset.
    ///
    /// Each record gets `id = next_id()` as it is inserted, so a freshly seeded
    /// repository holds ids `0..n` and later creations continue the sequence.
    pub fn seed(&mut self) -> Result<usize, AddressError> {
        let records = seed_records()?;
        self.clear();
        for mut record in records {
            record.id = self.next_id();
            self.insert(record);
        }
        tracing::info!(count = self.len(), "address repository seeded");
        Ok(self.len())
    }
}
