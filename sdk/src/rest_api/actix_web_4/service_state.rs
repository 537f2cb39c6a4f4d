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

use std::sync::Arc;

use crate::batches::{BatchIdGenerator, TimestampBatchIdGenerator};
use crate::uploads::UploadDirectory;

/// The default limit on the total size of a multipart request body, 10 MiB.
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Everything besides the stores that the routes need to serve a request
#[derive(Clone)]
pub struct ServiceState {
    pub uploads: UploadDirectory,
    pub id_generator: Arc<dyn BatchIdGenerator>,
    /// bcrypt cost used when hashing the password of a new user
    pub password_hash_cost: u32,
    pub max_upload_size: usize,
}

impl ServiceState {
    pub fn new(uploads: UploadDirectory) -> Self {
        Self {
            uploads,
            id_generator: Arc::new(TimestampBatchIdGenerator),
            password_hash_cost: bcrypt::DEFAULT_COST,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn BatchIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn with_password_hash_cost(mut self, password_hash_cost: u32) -> Self {
        self.password_hash_cost = password_hash_cost;
        self
    }

    pub fn with_max_upload_size(mut self, max_upload_size: usize) -> Self {
        self.max_upload_size = max_upload_size;
        self
    }
}
