use itertools::{Either, Itertools};

use crate::codewarsclient::{CodewarsClient, CodewarsUser};

/// Outcome of a single lookup: the fetched record, or the username that
/// was asked for when the lookup failed.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(CodewarsUser),
    Failed(String),
}

/// Partition of one batch of lookups into successes and failures.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub users: Vec<CodewarsUser>,
    pub failed: Vec<String>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.users.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.failed.is_empty()
    }

    /// True when lookups were issued and none of them produced a record.
    /// Callers should render this as "nothing found" rather than an error.
    pub fn all_failed(&self) -> bool {
        self.users.is_empty() && !self.failed.is_empty()
    }
}

/// Splits a raw comma-separated input into trimmed, non-empty usernames.
/// Duplicates survive; each occurrence gets its own lookup.
pub fn extract_usernames(raw_input: &str) -> Vec<String> {
    raw_input
        .split(',')
        .map(|username| username.trim())
        .filter(|username| !username.is_empty())
        .map(|username| username.to_string())
        .collect()
}

/// Looks up every username concurrently and waits for all lookups to
/// settle before returning. A failed lookup never aborts its siblings; it
/// lands in the failure bucket under its original username.
pub async fn fetch_users<C: CodewarsClient + Sync>(
    client: &C,
    usernames: &[String],
) -> BatchResult {
    log::debug!("Fetching a batch of {} users", usernames.len());

    let lookups = usernames.iter().map(|username| async move {
        match client.get_user(username).await {
            Ok(user) => FetchOutcome::Fetched(user),
            Err(e) => {
                log::warn!("lookup failed for {} {}", username, e);
                FetchOutcome::Failed(username.clone())
            }
        }
    });

    let (users, failed) = futures::future::join_all(lookups)
        .await
        .into_iter()
        .partition_map(|outcome| match outcome {
            FetchOutcome::Fetched(user) => Either::Left(user),
            FetchOutcome::Failed(username) => Either::Right(username),
        });

    let result = BatchResult { users, failed };
    log::debug!(
        "Batch settled with {} fetched and {} failed",
        result.users.len(),
        result.failed.len()
    );
    result
}
