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

pub(super) mod add_batch;
pub(super) mod add_certification;
pub(super) mod add_status_entry;
pub(super) mod count_batches;
pub(super) mod fetch_batch;
pub(super) mod list_batches;

pub(super) struct BatchStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C> BatchStoreOperations<'a, C>
where
    C: diesel::Connection,
{
    pub fn new(conn: &'a C) -> Self {
        BatchStoreOperations { conn }
    }
}
