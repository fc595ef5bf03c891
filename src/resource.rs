//! Schema-driven resource services.
//!
//! Every backend collection is served by the same [`ResourceService`],
//! configured by a [`ResourceDescriptor`]. One implementation covers
//! students, courses and enrollments instead of a near-identical service
//! module per resource; the descriptor carries the collection path plus any
//! per-resource create preparation (courses force `currentEnrollment` to 0).

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::client::http::HttpClient;
use crate::error::Result;
use crate::query::{ListQuery, Page, normalize_page};
use crate::types::{CourseRecord, EnrollmentRecord, ResourceId, StudentRecord};

/// Configuration for one backend collection.
///
/// ## Example
///
/// ```rust
/// use rosterly::ResourceDescriptor;
/// use rosterly::types::StudentRecord;
///
/// let descriptor = ResourceDescriptor::<StudentRecord>::students();
/// assert_eq!(descriptor.path(), "/students");
/// ```
pub struct ResourceDescriptor<T> {
    path: &'static str,
    prepare_create: Option<fn(&mut T)>,
}

impl<T> ResourceDescriptor<T> {
    /// Creates a descriptor for a flat collection at `path`.
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            prepare_create: None,
        }
    }

    /// Sets a hook applied to every record before it is POSTed.
    #[must_use]
    pub fn with_prepare_create(mut self, hook: fn(&mut T)) -> Self {
        self.prepare_create = Some(hook);
        self
    }

    /// Returns the collection path.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl<T> Clone for ResourceDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            prepare_create: self.prepare_create,
        }
    }
}

impl<T> std::fmt::Debug for ResourceDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ResourceDescriptor<StudentRecord> {
    /// Descriptor for the `/students` collection.
    pub fn students() -> Self {
        Self::new("/students")
    }
}

impl ResourceDescriptor<CourseRecord> {
    /// Descriptor for the `/courses` collection.
    ///
    /// New courses always start with a `currentEnrollment` of 0, whatever
    /// the caller put in the record.
    pub fn courses() -> Self {
        Self::new("/courses").with_prepare_create(|course| course.current_enrollment = 0)
    }
}

impl ResourceDescriptor<EnrollmentRecord> {
    /// Descriptor for the `/enrollments` collection.
    pub fn enrollments() -> Self {
        Self::new("/enrollments")
    }
}

/// Typed CRUD operations over one backend collection.
///
/// Obtained from [`Client::students()`](crate::Client::students) and
/// friends. Services are cheap to clone and share the client's connection
/// pool.
pub struct ResourceService<T> {
    http: Arc<HttpClient>,
    descriptor: ResourceDescriptor<T>,
}

impl<T> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            descriptor: self.descriptor.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ResourceService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("path", &self.descriptor.path)
            .finish_non_exhaustive()
    }
}

impl<T> ResourceService<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(http: Arc<HttpClient>, descriptor: ResourceDescriptor<T>) -> Self {
        Self { http, descriptor }
    }

    /// Returns the collection path this service operates on.
    pub fn path(&self) -> &'static str {
        self.descriptor.path
    }

    fn item_path(&self, id: &ResourceId) -> String {
        format!(
            "{}/{}",
            self.descriptor.path,
            urlencoding::encode(&id.to_string())
        )
    }

    /// Fetches one page of the collection.
    ///
    /// The query is translated to json-server parameters and the raw array
    /// plus `x-total-count` header are normalized into a [`Page`].
    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>> {
        let params = query.params();
        let (content, headers) = self
            .http
            .get_with_headers::<Vec<T>>(self.descriptor.path, &params)
            .await?;
        normalize_page(content, &headers, query)
    }

    /// Fetches the entire collection, unpaginated.
    ///
    /// Statistics are computed over full collections, never pages.
    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.http.get_json(self.descriptor.path, &[]).await
    }

    /// Fetches a single record by identifier.
    pub async fn get(&self, id: &ResourceId) -> Result<T> {
        self.http.get_json(&self.item_path(id), &[]).await
    }

    /// Creates a record, returning the stored record with its assigned id.
    pub async fn create(&self, record: &T) -> Result<T>
    where
        T: Clone,
    {
        match self.descriptor.prepare_create {
            Some(prepare) => {
                let mut payload = record.clone();
                prepare(&mut payload);
                self.http.post_json(self.descriptor.path, &payload).await
            }
            None => self.http.post_json(self.descriptor.path, record).await,
        }
    }

    /// Replaces a record by identifier.
    pub async fn update(&self, id: &ResourceId, record: &T) -> Result<T> {
        self.http.put_json(&self.item_path(id), record).await
    }

    /// Deletes a record by identifier.
    pub async fn delete(&self, id: &ResourceId) -> Result<()> {
        self.http.delete(&self.item_path(id)).await
    }
}
