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

use chrono::NaiveDateTime;

use crate::error::InternalError;
use crate::users::store::{diesel::schema::*, NewUser, User, UserStoreError};

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "herbstrace_user"]
pub struct NewUserModel {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub wallet_address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, PartialEq, Eq, Debug)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub wallet_address: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<NewUser> for NewUserModel {
    fn from(user: NewUser) -> Self {
        Self {
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            user_type: user.user_type.to_string(),
            phone: user.phone,
            address: user.address,
            wallet_address: user.wallet_address,
            created_at: user.created_at,
        }
    }
}

impl TryFrom<UserModel> for User {
    type Error = UserStoreError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let user_type = model.user_type.parse().map_err(|err| {
            UserStoreError::InternalError(InternalError::from_source_with_prefix(
                Box::new(err),
                format!("User {} has an invalid stored user type", model.id),
            ))
        })?;

        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            user_type,
            phone: model.phone,
            address: model.address,
            wallet_address: model.wallet_address,
            created_at: model.created_at,
        })
    }
}
