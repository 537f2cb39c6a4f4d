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

use chrono::{NaiveDateTime, Utc};

use super::error::UserBuilderError;
use super::{NewUser, UserType};

/// Builder used to create a NewUser
#[derive(Clone, Debug, Default)]
pub struct NewUserBuilder {
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
    user_type: Option<UserType>,
    phone: Option<String>,
    address: Option<String>,
    wallet_address: Option<String>,
    created_at: Option<NaiveDateTime>,
}

impl NewUserBuilder {
    pub fn new() -> Self {
        NewUserBuilder::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the bcrypt hash of the user's password
    pub fn with_password_hash(mut self, password_hash: String) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_wallet_address(mut self, wallet_address: String) -> Self {
        self.wallet_address = Some(wallet_address);
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> Result<NewUser, UserBuilderError> {
        let name = self.name.ok_or_else(|| {
            UserBuilderError::MissingRequiredField("Missing name".to_string())
        })?;
        let email = self.email.ok_or_else(|| {
            UserBuilderError::MissingRequiredField("Missing email".to_string())
        })?;
        let password_hash = self.password_hash.ok_or_else(|| {
            UserBuilderError::MissingRequiredField("Missing password_hash".to_string())
        })?;
        let user_type = self.user_type.ok_or_else(|| {
            UserBuilderError::MissingRequiredField("Missing user_type".to_string())
        })?;

        Ok(NewUser {
            name,
            email,
            password_hash,
            user_type,
            phone: self.phone,
            address: self.address,
            wallet_address: self.wallet_address,
            created_at: self.created_at.unwrap_or_else(|| Utc::now().naive_utc()),
        })
    }
}
