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

mod builder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub mod diesel;
mod error;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::InvalidArgumentError;

pub use builder::NewUserBuilder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub use self::diesel::DieselUserStore;
pub use error::{UserBuilderError, UserStoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    Farmer,
    Manufacturer,
    Consumer,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserType::Farmer => f.write_str("farmer"),
            UserType::Manufacturer => f.write_str("manufacturer"),
            UserType::Consumer => f.write_str("consumer"),
        }
    }
}

impl FromStr for UserType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(UserType::Farmer),
            "manufacturer" => Ok(UserType::Manufacturer),
            "consumer" => Ok(UserType::Consumer),
            _ => Err(InvalidArgumentError::new(
                "userType".to_string(),
                format!("unknown user type '{}'", s),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub wallet_address: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A user that has not been stored yet; the store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub wallet_address: Option<String>,
    pub created_at: NaiveDateTime,
}

pub trait UserStore: Send + Sync {
    /// Adds a user
    ///
    /// Returns a `ConstraintViolationError` if a user with the same email already exists.
    ///
    /// # Arguments
    ///
    ///  * `user` - The user to be added
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;

    /// Fetches a user by email
    ///
    /// # Arguments
    ///
    ///  * `email` - The email the user registered with
    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
}

impl<US> UserStore for Box<US>
where
    US: UserStore + ?Sized,
{
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        (**self).add_user(user)
    }

    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        (**self).fetch_user_by_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_from_str() {
        assert_eq!("farmer".parse::<UserType>().ok(), Some(UserType::Farmer));
        assert_eq!(
            "manufacturer".parse::<UserType>().ok(),
            Some(UserType::Manufacturer)
        );
        assert_eq!("consumer".parse::<UserType>().ok(), Some(UserType::Consumer));
        assert!("Farmer".parse::<UserType>().is_err());
        assert!("admin".parse::<UserType>().is_err());
    }

    #[test]
    fn test_user_type_display_round_trip() {
        for user_type in [UserType::Farmer, UserType::Manufacturer, UserType::Consumer].iter() {
            assert_eq!(
                user_type.to_string().parse::<UserType>().ok(),
                Some(*user_type)
            );
        }
    }
}
