//! HttpEmployeeApi - REST implementation of the record API.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET    /employees?page=&size=[&sort=][&search=]`
//! - `GET    /employees/{id}`
//! - `POST   /employees`
//! - `PUT    /employees/{id}`
//! - `DELETE /employees/{id}`

use super::client::{ApiClient, RequestKind, TokenProvider, check, map_transport_error, send};
use async_trait::async_trait;
use reqwest::Method;
use staffdesk_core::Result;
use staffdesk_core::employee::{Employee, EmployeeApi, EmployeeDraft, EmployeeId, Page, PageQuery};
use std::sync::Arc;

const ENTITY: &str = "employee";

pub struct HttpEmployeeApi {
    client: ApiClient,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpEmployeeApi {
    /// Creates a client that authenticates with tokens from `tokens`.
    pub fn new(client: ApiClient, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { client, tokens }
    }

    fn list_params(query: &PageQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", query.page_index.to_string()),
            ("size", query.page_size.to_string()),
        ];
        if let Some(sort) = &query.sort_key {
            params.push(("sort", sort.to_string()));
        }
        if !query.search_term.is_empty() {
            params.push(("search", query.search_term.clone()));
        }
        params
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_records(&self, query: &PageQuery) -> Result<Page<Employee>> {
        let request = self
            .client
            .request(Method::GET, "employees", self.tokens.as_ref())
            .query(&Self::list_params(query));

        let response = check(send(request).await?, RequestKind::List).await?;
        response.json().await.map_err(map_transport_error)
    }

    async fn get_record(&self, id: EmployeeId) -> Result<Employee> {
        let id_str = id.to_string();
        let request = self
            .client
            .request(Method::GET, &format!("employees/{id}"), self.tokens.as_ref());

        let kind = RequestKind::Fetch {
            entity_type: ENTITY,
            id: &id_str,
        };
        let response = check(send(request).await?, kind).await?;
        response.json().await.map_err(map_transport_error)
    }

    async fn create_record(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let request = self
            .client
            .request(Method::POST, "employees", self.tokens.as_ref())
            .json(draft);

        let kind = RequestKind::Mutation {
            action: "add",
            entity_type: ENTITY,
            id: None,
        };
        let response = check(send(request).await?, kind).await?;
        response.json().await.map_err(map_transport_error)
    }

    async fn update_record(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<Employee> {
        let id_str = id.to_string();
        let request = self
            .client
            .request(Method::PUT, &format!("employees/{id}"), self.tokens.as_ref())
            .json(draft);

        let kind = RequestKind::Mutation {
            action: "edit",
            entity_type: ENTITY,
            id: Some(&id_str),
        };
        let response = check(send(request).await?, kind).await?;
        response.json().await.map_err(map_transport_error)
    }

    async fn delete_record(&self, id: EmployeeId) -> Result<()> {
        let id_str = id.to_string();
        let request = self
            .client
            .request(Method::DELETE, &format!("employees/{id}"), self.tokens.as_ref());

        let kind = RequestKind::Mutation {
            action: "delete",
            entity_type: ENTITY,
            id: Some(&id_str),
        };
        check(send(request).await?, kind).await?;
        Ok(())
    }
}
