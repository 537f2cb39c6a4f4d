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

pub mod handler;
pub mod payloads;

pub use handler::{
    add_certification, count_batches, create_batch, fetch_batch, list_batches, parse_batch_id,
    update_status,
};
pub use payloads::{
    BatchCountResponse, BatchCreatedResponse, BatchSlice, BatchSummarySlice,
    CertificationSlice, CertificationUploadedResponse, StatusEntrySlice, StatusUpdateRequest,
    StatusUpdatedResponse,
};
