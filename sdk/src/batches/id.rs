// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::Utc;

/// Produces the identifier of a newly collected batch.
pub trait BatchIdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Uses the current time in milliseconds as the batch id.
///
/// Two batches created within the same millisecond receive the same id; the second insert is then
/// rejected by the store with a unique constraint violation.
#[derive(Clone, Debug, Default)]
pub struct TimestampBatchIdGenerator;

impl BatchIdGenerator for TimestampBatchIdGenerator {
    fn next_id(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ids are Unix times in milliseconds, not seconds.
    #[test]
    fn test_timestamp_ids_are_milliseconds() {
        let id = TimestampBatchIdGenerator.next_id();

        // 2020-09-13T12:26:40Z in milliseconds
        assert!(id > 1_600_000_000_000);
    }
}
