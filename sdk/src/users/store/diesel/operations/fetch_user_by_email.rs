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

use std::convert::TryFrom;

use super::UserStoreOperations;
use crate::users::store::{
    diesel::{models::UserModel, schema::herbstrace_user},
    User, UserStoreError,
};

use diesel::{prelude::*, result::Error::NotFound};

pub(in crate::users::store::diesel) trait FetchUserByEmailOperation {
    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> FetchUserByEmailOperation for UserStoreOperations<'a, diesel::pg::PgConnection> {
    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        herbstrace_user::table
            .filter(herbstrace_user::email.eq(email))
            .first::<UserModel>(self.conn)
            .map(Some)
            .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            .map(User::try_from)
            .transpose()
    }
}

#[cfg(feature = "sqlite")]
impl<'a> FetchUserByEmailOperation for UserStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        herbstrace_user::table
            .filter(herbstrace_user::email.eq(email))
            .first::<UserModel>(self.conn)
            .map(Some)
            .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            .map(User::try_from)
            .transpose()
    }
}
