//! Backend auth API: request bodies, response body and the HTTP client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{RegistrationSchema, SubmitterConfig};
use crate::error::TransportError;

fn serialize_secret<S: Serializer>(secret: &SecretString, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(secret.expose_secret())
}

/// Login request body: `{ email, password }`.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Values read from the registration form.
#[derive(Debug)]
pub struct RegistrationFields {
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: SecretString,
}

impl RegistrationFields {
    /// Shapes the fields into the body the backend expects.
    ///
    /// For [`RegistrationSchema::SplitName`] a form without a first-name
    /// field sends the username as first name and an empty last name.
    pub fn into_request(self, schema: RegistrationSchema) -> RegistrationRequest {
        match schema {
            RegistrationSchema::Username => RegistrationRequest::Username {
                username: self.username,
                email: self.email,
                password: self.password,
            },
            RegistrationSchema::SplitName => RegistrationRequest::SplitName {
                firstname: self.firstname.unwrap_or(self.username),
                lastname: self.lastname.unwrap_or_default(),
                email: self.email,
                password: self.password,
            },
        }
    }
}

/// Registration request body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegistrationRequest {
    Username {
        username: String,
        email: String,
        #[serde(serialize_with = "serialize_secret")]
        password: SecretString,
    },
    SplitName {
        firstname: String,
        lastname: String,
        email: String,
        #[serde(serialize_with = "serialize_secret")]
        password: SecretString,
    },
}

/// Treats an explicit `null` like a missing message.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Body returned by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

/// The backend's login and registration endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, TransportError>;

    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse, TransportError>;
}

/// [`AuthApi`] over HTTP, posting JSON bodies.
pub struct HttpAuthApi {
    client: reqwest::Client,
    login_url: String,
    register_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &SubmitterConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &SubmitterConfig) -> Self {
        Self {
            client,
            login_url: config.login_url(),
            register_url: config.register_url(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }

    /// Posts `body` and decodes the reply.
    ///
    /// The status code is not inspected: the backend answers rejections
    /// with 4xx and a regular `ApiResponse` body.
    async fn post_json<T>(&self, url: &str, body: &T) -> Result<ApiResponse, TransportError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        #[cfg(feature = "tracing")]
        tracing::debug!("POST {} -> {}", url, response.status());

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, TransportError> {
        self.post_json(&self.login_url, credentials).await
    }

    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse, TransportError> {
        self.post_json(&self.register_url, request).await
    }
}
