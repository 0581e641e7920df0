use bankapi_core::{Account, AccountInput};
use bankapi_storage::{AccountRepository, Database, SqliteAccountRepository};

use crate::ServiceError;
use crate::params::parse_int;

const AMOUNT_FILTER_PREFIX: &str = "Account id, amount greater than and amount less than values, must all be ints. User provided \nid: ";

fn bad_account_ids(client_id: &str, account_id: &str) -> ServiceError {
    ServiceError::BadParameter(format!(
        "Client id and Account id must be ints. User provided {client_id} and {account_id}"
    ))
}

/// Account operations over raw string parameters.
///
/// Every call checks out a connection, opens a unit of work, parses its
/// parameters inside it, runs exactly one repository call and commits.
pub struct AccountService<R = SqliteAccountRepository> {
    db: Database,
    repository: R,
}

impl AccountService {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self::with_repository(db, SqliteAccountRepository::new())
    }
}

impl<R: AccountRepository> AccountService<R> {
    #[must_use]
    pub const fn with_repository(db: Database, repository: R) -> Self {
        Self { db, repository }
    }

    pub fn list_accounts(&self, client_id: &str) -> Result<Vec<Account>, ServiceError> {
        self.db.unit_of_work(|conn| {
            let id = parse_int(client_id).ok_or_else(|| {
                ServiceError::BadParameter(format!(
                    "Account id must be an int. User provided id: {client_id}"
                ))
            })?;
            Ok(self.repository.list_accounts(conn, id)?)
        })
    }

    pub fn list_accounts_less_than(
        &self,
        client_id: &str,
        amount_less_than: &str,
    ) -> Result<Vec<Account>, ServiceError> {
        self.db.unit_of_work(|conn| {
            let (Some(id), Some(less_than)) = (parse_int(client_id), parse_int(amount_less_than))
            else {
                return Err(ServiceError::BadParameter(format!(
                    "{AMOUNT_FILTER_PREFIX}{client_id} amount less than: {amount_less_than}"
                )));
            };
            Ok(self.repository.list_accounts_less_than(conn, id, less_than)?)
        })
    }

    pub fn list_accounts_greater_than(
        &self,
        client_id: &str,
        amount_greater_than: &str,
    ) -> Result<Vec<Account>, ServiceError> {
        self.db.unit_of_work(|conn| {
            let (Some(id), Some(greater_than)) =
                (parse_int(client_id), parse_int(amount_greater_than))
            else {
                return Err(ServiceError::BadParameter(format!(
                    "{AMOUNT_FILTER_PREFIX}{client_id} amount greater than: {amount_greater_than}"
                )));
            };
            Ok(self.repository.list_accounts_greater_than(conn, id, greater_than)?)
        })
    }

    pub fn list_accounts_between(
        &self,
        client_id: &str,
        amount_greater_than: &str,
        amount_less_than: &str,
    ) -> Result<Vec<Account>, ServiceError> {
        self.db.unit_of_work(|conn| {
            let (Some(id), Some(greater_than), Some(less_than)) = (
                parse_int(client_id),
                parse_int(amount_greater_than),
                parse_int(amount_less_than),
            ) else {
                return Err(ServiceError::BadParameter(format!(
                    "{AMOUNT_FILTER_PREFIX}{client_id} amount greater than: {amount_greater_than} amount less than: {amount_less_than}"
                )));
            };
            Ok(self.repository.list_accounts_between(conn, id, greater_than, less_than)?)
        })
    }

    pub fn get_account_by_id(
        &self,
        client_id: &str,
        account_id: &str,
    ) -> Result<Account, ServiceError> {
        self.db.unit_of_work(|conn| {
            let (Some(owner), Some(id)) = (parse_int(client_id), parse_int(account_id)) else {
                return Err(bad_account_ids(client_id, account_id));
            };
            Ok(self.repository.get_account(conn, owner, id)?)
        })
    }

    pub fn add_account(
        &self,
        client_id: &str,
        input: AccountInput,
    ) -> Result<Account, ServiceError> {
        if input.has_blank_type() {
            return Err(ServiceError::AddAccount(
                "User tried to add an account without an account type.".to_owned(),
            ));
        }

        self.db.unit_of_work(|conn| {
            let owner = parse_int(client_id).ok_or_else(|| {
                ServiceError::BadParameter(format!(
                    "Account id must be an int. User provided {client_id}"
                ))
            })?;
            Ok(self.repository.add_account(conn, owner, &input)?)
        })
    }

    pub fn update_account(
        &self,
        client_id: &str,
        account_id: &str,
        input: AccountInput,
    ) -> Result<Account, ServiceError> {
        if input.has_blank_type() {
            return Err(ServiceError::UpdateAccount(
                "User tried to update an account without an account type.".to_owned(),
            ));
        }

        self.db.unit_of_work(|conn| {
            let (Some(owner), Some(id)) = (parse_int(client_id), parse_int(account_id)) else {
                return Err(bad_account_ids(client_id, account_id));
            };
            Ok(self.repository.update_account(conn, owner, id, &input)?)
        })
    }

    pub fn delete_account(&self, client_id: &str, account_id: &str) -> Result<bool, ServiceError> {
        self.db.unit_of_work(|conn| {
            let (Some(owner), Some(id)) = (parse_int(client_id), parse_int(account_id)) else {
                return Err(bad_account_ids(client_id, account_id));
            };
            Ok(self.repository.delete_account(conn, owner, id)?)
        })
    }
}
