//! Session state carried between cases.

use alumni_probe_domain::{BaseUrl, Credential, Headers, RequestSpec};

use crate::ports::HttpRequest;

/// Endpoint plus the identity captured by a successful registration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    base_url: BaseUrl,
    credential: Option<Credential>,
    subject_id: Option<String>,
}

impl Session {
    /// Creates an unauthenticated session for `base_url`.
    #[must_use]
    pub const fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            credential: None,
            subject_id: None,
        }
    }

    /// Stores the credential and user id returned by registration.
    pub fn authenticate(&mut self, credential: Credential, subject_id: Option<String>) {
        self.credential = Some(credential);
        self.subject_id = subject_id;
    }

    /// Returns true once a credential is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The held credential, if any.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Id of the registered user, if the registration response carried one.
    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Resolves a request specification into the request actually sent.
    ///
    /// `Content-Type: application/json` and, when authenticated,
    /// `Authorization: Bearer <token>` are set first; headers on the
    /// specification then override or extend them.
    #[must_use]
    pub fn prepare(&self, spec: &RequestSpec) -> HttpRequest {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/json");
        if let Some(credential) = &self.credential {
            headers.set("Authorization", credential.bearer());
        }
        headers.extend_from(&spec.headers);

        HttpRequest {
            method: spec.method,
            url: self.base_url.join(&spec.path),
            headers,
            body: spec.body.clone(),
        }
    }
}
