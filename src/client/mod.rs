//! Client types for connecting to a roster backend.
//!
//! [`Client`] is the entry point: it owns the HTTP connection and hands out
//! schema-driven [`ResourceService`](crate::ResourceService) values for the
//! three collections the backend exposes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rosterly::prelude::*;
//!
//! let client = Client::builder()
//!     .base_url("http://localhost:3000")?
//!     .build()?;
//!
//! let page = client.students().list(&ListQuery::new().search("ann")).await?;
//! let stats = client.student_statistics().await?;
//! ```

mod builder;
pub(crate) mod http;

pub use builder::ClientBuilder;
pub use http::RequestStats;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::resource::{ResourceDescriptor, ResourceService};
use crate::types::{CourseRecord, EnrollmentRecord, StudentRecord};

/// The rosterly client.
///
/// Create one with [`Client::builder()`], then use the typed accessors
/// ([`students()`](Client::students), [`courses()`](Client::courses),
/// [`enrollments()`](Client::enrollments)) for collection operations and
/// the statistics methods for aggregate snapshots.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. It shares a single connection pool
/// and can be used across tasks; concurrent calls from the same screen
/// (a list fetch, a statistics fetch, a course lookup) run independently
/// with no ordering guarantee.
#[derive(Clone)]
pub struct Client {
    http: Arc<http::HttpClient>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    /// Returns a snapshot of the request counters.
    pub fn stats(&self) -> RequestStats {
        self.http.stats()
    }

    /// Returns the service for the `/students` collection.
    pub fn students(&self) -> ResourceService<StudentRecord> {
        self.resource(ResourceDescriptor::students())
    }

    /// Returns the service for the `/courses` collection.
    pub fn courses(&self) -> ResourceService<CourseRecord> {
        self.resource(ResourceDescriptor::courses())
    }

    /// Returns the service for the `/enrollments` collection.
    pub fn enrollments(&self) -> ResourceService<EnrollmentRecord> {
        self.resource(ResourceDescriptor::enrollments())
    }

    /// Returns a service for an arbitrary resource descriptor.
    ///
    /// The typed accessors cover the standard collections; this is the
    /// escape hatch for backends with additional flat resources that follow
    /// the same conventions.
    pub fn resource<T>(&self, descriptor: ResourceDescriptor<T>) -> ResourceService<T>
    where
        T: Serialize + DeserializeOwned,
    {
        ResourceService::new(Arc::clone(&self.http), descriptor)
    }

    pub(crate) fn from_http(http: http::HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}
