use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::domain::models::invitee::{Invitee, InviteePatch};
use crate::domain::ports::InviteeRepository;
use crate::error::AppError;
use crate::infra::repositories::local_invitee_repo::LocalInviteeRepo;

/// Remote-backed store: forwards to the hosted structured store's `invitados`
/// collection. Remote failures never reach the operator: reads fall back to
/// the local blob for that call, failed mutations are logged and lost.
pub struct RemoteInviteeRepo {
    client: Client,
    base_url: String,
    token: Option<String>,
    fallback: LocalInviteeRepo,
}

impl RemoteInviteeRepo {
    pub fn new(base_url: String, token: Option<String>, fallback: LocalInviteeRepo) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
            fallback,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/invitados", self.base_url.trim_end_matches('/'))
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Invitee>, reqwest::Error> {
        let res = self
            .authorize(self.client.get(self.collection_url()))
            .query(&[("order_by", "full_name")])
            .send()
            .await?
            .error_for_status()?;

        res.json().await
    }
}

#[async_trait]
impl InviteeRepository for RemoteInviteeRepo {
    async fn list(&self) -> Result<Vec<Invitee>, AppError> {
        match self.fetch_all().await {
            Ok(mut invitees) => {
                invitees.sort_by_key(|i| i.full_name.to_lowercase());
                Ok(invitees)
            }
            Err(e) => {
                warn!("Remote store read failed, serving local fallback: {}", e);
                self.fallback.list().await
            }
        }
    }

    async fn insert(&self, invitee: &Invitee) -> Result<(), AppError> {
        let result = self
            .authorize(self.client.post(self.collection_url()))
            .json(invitee)
            .send()
            .await
            .and_then(|res| res.error_for_status());

        if let Err(e) = result {
            warn!("Remote store insert failed, mutation lost: {}", e);
        }
        Ok(())
    }

    async fn update(&self, id: &str, patch: &InviteePatch) -> Result<(), AppError> {
        let result = self
            .authorize(self.client.patch(self.document_url(id)))
            .json(patch)
            .send()
            .await
            .and_then(|res| res.error_for_status());

        if let Err(e) = result {
            warn!("Remote store update for {} failed, mutation lost: {}", id, e);
        }
        Ok(())
    }
}
