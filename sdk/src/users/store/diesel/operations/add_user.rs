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

use super::fetch_user_by_email::FetchUserByEmailOperation;
use super::UserStoreOperations;
use crate::error::InternalError;
use crate::users::store::{
    diesel::{models::NewUserModel, schema::herbstrace_user},
    NewUser, User, UserStoreError,
};

use diesel::{dsl::insert_into, prelude::*};

pub(in crate::users::store::diesel) trait AddUserOperation {
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> AddUserOperation for UserStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let email = user.email.clone();

        self.conn.transaction::<_, UserStoreError, _>(|| {
            insert_into(herbstrace_user::table)
                .values(NewUserModel::from(user))
                .execute(self.conn)?;

            self.fetch_user_by_email(&email)?.ok_or_else(|| {
                UserStoreError::InternalError(InternalError::with_message(format!(
                    "User {} missing after it was added",
                    email
                )))
            })
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> AddUserOperation for UserStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let email = user.email.clone();

        self.conn.immediate_transaction::<_, UserStoreError, _>(|| {
            insert_into(herbstrace_user::table)
                .values(NewUserModel::from(user))
                .execute(self.conn)?;

            self.fetch_user_by_email(&email)?.ok_or_else(|| {
                UserStoreError::InternalError(InternalError::with_message(format!(
                    "User {} missing after it was added",
                    email
                )))
            })
        })
    }
}
