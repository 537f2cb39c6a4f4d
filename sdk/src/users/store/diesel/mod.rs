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

pub(in crate) mod models;
mod operations;
pub(in crate) mod schema;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{NewUser, User, UserStore, UserStoreError};

use operations::add_user::AddUserOperation as _;
use operations::fetch_user_by_email::FetchUserByEmailOperation as _;
use operations::UserStoreOperations;

/// Manages users in a database
#[derive(Clone)]
pub struct DieselUserStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselUserStore<C> {
    /// Creates a new `DieselUserStore`
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool for the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselUserStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl UserStore for DieselUserStore<diesel::pg::PgConnection> {
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        UserStoreOperations::new(&*self.connection_pool.get()?).add_user(user)
    }

    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        UserStoreOperations::new(&*self.connection_pool.get()?).fetch_user_by_email(email)
    }
}

#[cfg(feature = "sqlite")]
impl UserStore for DieselUserStore<diesel::sqlite::SqliteConnection> {
    fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        UserStoreOperations::new(&*self.connection_pool.get()?).add_user(user)
    }

    fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        UserStoreOperations::new(&*self.connection_pool.get()?).fetch_user_by_email(email)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use diesel::sqlite::SqliteConnection;

    use crate::error::ConstraintViolationType;
    use crate::migrations::run_sqlite_migrations;
    use crate::users::store::{NewUserBuilder, UserType};

    fn create_connection_pool_and_migrate(
    ) -> Result<Pool<ConnectionManager<SqliteConnection>>, Box<dyn std::error::Error>> {
        let connection_manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(connection_manager)?;

        run_sqlite_migrations(&*pool.get()?)?;

        Ok(pool)
    }

    fn new_user(email: &str) -> NewUser {
        NewUserBuilder::new()
            .with_name("Ravi".to_string())
            .with_email(email.to_string())
            .with_password_hash("$2b$04$not.a.real.hash".to_string())
            .with_user_type(UserType::Manufacturer)
            .with_phone("+91 98765 43210".to_string())
            .build()
            .expect("unable to build user")
    }

    /// An added user is assigned an id and can be fetched by email.
    #[test]
    fn test_add_and_fetch_user() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselUserStore::new(create_connection_pool_and_migrate()?);

        let user = store.add_user(new_user("ravi@example.com"))?;
        assert!(user.id > 0);
        assert_eq!(user.user_type, UserType::Manufacturer);
        assert_eq!(user.phone.as_deref(), Some("+91 98765 43210"));
        assert_eq!(user.address, None);

        assert_eq!(
            store.fetch_user_by_email("ravi@example.com")?,
            Some(user)
        );
        assert_eq!(store.fetch_user_by_email("nobody@example.com")?, None);

        Ok(())
    }

    /// A second registration with the same email is rejected by the store.
    #[test]
    fn test_duplicate_email() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselUserStore::new(create_connection_pool_and_migrate()?);
        store.add_user(new_user("ravi@example.com"))?;

        match store.add_user(new_user("ravi@example.com")) {
            Err(UserStoreError::ConstraintViolationError(err)) => {
                assert_eq!(err.violation_type(), &ConstraintViolationType::Unique);
                Ok(())
            }
            other => panic!("expected a unique constraint violation, got {:?}", other),
        }
    }
}
