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

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use diesel::r2d2::{ConnectionManager, Pool};

use crate::batches::store::BatchStore;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use crate::batches::store::DieselBatchStore;
use crate::products::store::ProductStore;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use crate::products::store::DieselProductStore;
use crate::users::store::UserStore;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use crate::users::store::DieselUserStore;

/// The stores shared by every worker of the REST API
#[derive(Clone)]
pub struct StoreState {
    pub batch_store: Arc<dyn BatchStore>,
    pub product_store: Arc<dyn ProductStore>,
    pub user_store: Arc<dyn UserStore>,
}

impl StoreState {
    #[cfg(feature = "postgres")]
    pub fn with_pg_pool(
        connection_pool: Pool<ConnectionManager<diesel::pg::PgConnection>>,
    ) -> Self {
        let batch_store = Arc::new(DieselBatchStore::new(connection_pool.clone()));
        let product_store = Arc::new(DieselProductStore::new(connection_pool.clone()));
        let user_store = Arc::new(DieselUserStore::new(connection_pool));

        Self {
            batch_store,
            product_store,
            user_store,
        }
    }

    #[cfg(feature = "sqlite")]
    pub fn with_sqlite_pool(
        connection_pool: Pool<ConnectionManager<diesel::sqlite::SqliteConnection>>,
    ) -> Self {
        let batch_store = Arc::new(DieselBatchStore::new(connection_pool.clone()));
        let product_store = Arc::new(DieselProductStore::new(connection_pool.clone()));
        let user_store = Arc::new(DieselUserStore::new(connection_pool));

        Self {
            batch_store,
            product_store,
            user_store,
        }
    }
}
