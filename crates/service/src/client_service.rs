use bankapi_core::{Client, ClientInput, ClientSummary};
use bankapi_storage::{ClientRepository, Database, SqliteClientRepository};

use crate::ServiceError;
use crate::params::parse_int;

fn bad_client_id(client_id: &str) -> ServiceError {
    ServiceError::BadParameter(format!("Client id must be an int. User provided: {client_id}"))
}

/// Client operations over raw string parameters.
///
/// Reads run on a plain pooled connection; writes run inside a unit of work.
pub struct ClientService<R = SqliteClientRepository> {
    db: Database,
    repository: R,
}

impl ClientService {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self::with_repository(db, SqliteClientRepository::new())
    }
}

impl<R: ClientRepository> ClientService<R> {
    #[must_use]
    pub const fn with_repository(db: Database, repository: R) -> Self {
        Self { db, repository }
    }

    pub fn list_clients(&self) -> Result<Vec<ClientSummary>, ServiceError> {
        self.db.with_connection(|conn| Ok(self.repository.list_clients(conn)?))
    }

    pub fn get_client_by_id(&self, client_id: &str) -> Result<ClientSummary, ServiceError> {
        let id = parse_int(client_id).ok_or_else(|| {
            ServiceError::BadParameter(format!(
                "Client id must be an int. User Provided: {client_id}"
            ))
        })?;
        self.db.with_connection(|conn| Ok(self.repository.get_client(conn, id)?))
    }

    pub fn add_client(&self, input: ClientInput) -> Result<Client, ServiceError> {
        if input.has_blank_name() {
            return Err(ServiceError::AddClient(
                "User tried to add a client without a first or last name".to_owned(),
            ));
        }

        self.db.unit_of_work(|conn| Ok(self.repository.add_client(conn, &input)?))
    }

    /// Names are validated before the id is parsed.
    pub fn update_client(
        &self,
        client_id: &str,
        input: ClientInput,
    ) -> Result<ClientSummary, ServiceError> {
        if input.has_blank_name() {
            return Err(ServiceError::UpdateClient(
                "User tried to update a client without giving a first and last name to update"
                    .to_owned(),
            ));
        }

        self.db.unit_of_work(|conn| {
            let id = parse_int(client_id).ok_or_else(|| bad_client_id(client_id))?;
            Ok(self.repository.update_client(conn, id, &input)?)
        })
    }

    pub fn delete_client(&self, client_id: &str) -> Result<bool, ServiceError> {
        self.db.unit_of_work(|conn| {
            let id = parse_int(client_id).ok_or_else(|| bad_client_id(client_id))?;
            Ok(self.repository.delete_client(conn, id)?)
        })
    }
}
