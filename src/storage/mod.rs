// Storage module: pushes records to the remote course table.

pub mod supabase;

pub use supabase::SupabaseUpserter;

use crate::model::{OutputRecord, StorageError};
use tracing::{debug, info};

/// Records per upsert request.
pub const CHUNK_SIZE: usize = 200;

#[async_trait::async_trait]
pub trait Upserter: Send + Sync {
    /// Upserts one batch and returns the number of rows the server reports back.
    async fn upsert(&self, batch: &[OutputRecord]) -> Result<usize, StorageError>;
}

/// Sends `records` in chunks of [`CHUNK_SIZE`], one request at a time.
///
/// The first failing chunk ends the upload. Chunks already accepted stay written.
pub async fn upload_in_chunks(
    upserter: &dyn Upserter,
    records: &[OutputRecord],
) -> Result<usize, StorageError> {
    let mut sent = 0;
    for (i, chunk) in records.chunks(CHUNK_SIZE).enumerate() {
        let returned = upserter.upsert(chunk).await?;
        info!("Upserted chunk {}: {} rows", i + 1, chunk.len());
        debug!("Chunk {} returned {} rows", i + 1, returned);
        sent += chunk.len();
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CREDITS;
    use std::sync::Mutex;

    struct RecordingUpserter {
        batches: Mutex<Vec<usize>>,
        fail_on: Option<usize>,
    }

    impl RecordingUpserter {
        fn new(fail_on: Option<usize>) -> Self {
            Self {
                batches: Mutex::new(Vec::new()),
                fail_on,
            }
        }
    }

    #[async_trait::async_trait]
    impl Upserter for RecordingUpserter {
        async fn upsert(&self, batch: &[OutputRecord]) -> Result<usize, StorageError> {
            let mut batches = self.batches.lock().unwrap();
            if self.fail_on == Some(batches.len()) {
                return Err(StorageError::Rejected {
                    status: 409,
                    body: "conflict".into(),
                });
            }
            batches.push(batch.len());
            Ok(batch.len())
        }
    }

    fn records(n: usize) -> Vec<OutputRecord> {
        (0..n)
            .map(|i| OutputRecord {
                code: "ENGL".into(),
                name: format!("Course {i}"),
                credits: DEFAULT_CREDITS,
                attribute: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn sends_fixed_size_chunks_in_order() {
        let upserter = RecordingUpserter::new(None);
        let sent = upload_in_chunks(&upserter, &records(450)).await.unwrap();
        assert_eq!(sent, 450);
        assert_eq!(*upserter.batches.lock().unwrap(), vec![200, 200, 50]);
    }

    #[tokio::test]
    async fn empty_input_sends_nothing() {
        let upserter = RecordingUpserter::new(None);
        assert_eq!(upload_in_chunks(&upserter, &[]).await.unwrap(), 0);
        assert!(upserter.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stops_at_first_rejected_chunk() {
        let upserter = RecordingUpserter::new(Some(1));
        let err = upload_in_chunks(&upserter, &records(650)).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected { status: 409, .. }));
        assert_eq!(*upserter.batches.lock().unwrap(), vec![200]);
    }
}
