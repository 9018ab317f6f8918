//! Firestore REST client with write access.

use std::sync::Arc;

use hibhana_core::firestore::{FieldMap, decode_fields, document_fields, document_id};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use crate::config::FirebaseConfig;
use crate::firebase::FirebaseError;

/// Upper bound on documents fetched per collection listing.
const LIST_PAGE_SIZE: u32 = 300;

/// A Firestore document decoded to plain JSON, as returned to the admin UI.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDocument {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AdminDocument {
    /// Decode a raw Firestore document.
    fn from_raw(doc: &Value) -> Option<Self> {
        let id = document_id(doc.get("name")?.as_str()?).to_owned();
        let fields = document_fields(doc).map(decode_fields).unwrap_or_default();
        Some(Self { id, fields })
    }
}

/// Client for Firestore catalog writes and admin-side reads.
#[derive(Clone)]
pub struct FirestoreClient {
    inner: Arc<FirestoreClientInner>,
}

struct FirestoreClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirestoreClient {
    /// Create a new Firestore client.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &FirebaseConfig) -> Self {
        Self {
            inner: Arc::new(FirestoreClientInner {
                client,
                base_url: config.firestore_base_url(),
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Check a response status and parse the body as JSON.
    async fn parse_response(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<Value, FirebaseError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FirebaseError::NotFound(context.to_owned()));
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(FirebaseError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// List every document in a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, collection: &str) -> Result<Vec<AdminDocument>, FirebaseError> {
        let response = self
            .inner
            .client
            .get(self.url(collection))
            .query(&[
                ("key", self.inner.api_key.as_str()),
                ("pageSize", &LIST_PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;

        let parsed = self.parse_response(response, collection).await?;

        Ok(parsed
            .get("documents")
            .and_then(Value::as_array)
            .map(|docs| docs.iter().filter_map(AdminDocument::from_raw).collect())
            .unwrap_or_default())
    }

    /// Get a single document.
    ///
    /// # Errors
    ///
    /// Returns `FirebaseError::NotFound` if the document does not exist.
    #[instrument(skip(self))]
    pub async fn get(&self, collection: &str, id: &str) -> Result<AdminDocument, FirebaseError> {
        let context = format!("{collection}/{id}");
        let response = self
            .inner
            .client
            .get(self.url(&context))
            .query(&[("key", self.inner.api_key.as_str())])
            .send()
            .await?;

        let doc = self.parse_response(response, &context).await?;
        AdminDocument::from_raw(&doc).ok_or(FirebaseError::NotFound(context))
    }

    /// Create a document with an auto-generated ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, fields))]
    pub async fn create(
        &self,
        collection: &str,
        fields: FieldMap,
    ) -> Result<AdminDocument, FirebaseError> {
        let response = self
            .inner
            .client
            .post(self.url(collection))
            .query(&[("key", self.inner.api_key.as_str())])
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let doc = self.parse_response(response, collection).await?;
        let created =
            AdminDocument::from_raw(&doc).ok_or_else(|| FirebaseError::NotFound(collection.to_owned()))?;

        info!(collection, id = %created.id, "Document created");
        Ok(created)
    }

    /// Merge-patch a document: only the provided fields are replaced.
    ///
    /// # Errors
    ///
    /// Returns `FirebaseError::NotFound` if the document does not exist.
    #[instrument(skip(self, fields))]
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: FieldMap,
    ) -> Result<AdminDocument, FirebaseError> {
        let context = format!("{collection}/{id}");

        // One updateMask entry per field keeps unrelated fields intact.
        let mut query: Vec<(&str, String)> = vec![
            ("key", self.inner.api_key.clone()),
            // Reject the patch instead of upserting a new document.
            ("currentDocument.exists", "true".to_string()),
        ];
        for name in fields.keys() {
            query.push(("updateMask.fieldPaths", name.clone()));
        }

        let response = self
            .inner
            .client
            .patch(self.url(&context))
            .query(&query)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let doc = self.parse_response(response, &context).await?;
        let updated = AdminDocument::from_raw(&doc).ok_or(FirebaseError::NotFound(context))?;

        info!(collection, id, "Document updated");
        Ok(updated)
    }

    /// Delete a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails. Firestore treats deleting
    /// a missing document as success.
    #[instrument(skip(self))]
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), FirebaseError> {
        let context = format!("{collection}/{id}");
        let response = self
            .inner
            .client
            .delete(self.url(&context))
            .query(&[("key", self.inner.api_key.as_str())])
            .send()
            .await?;

        self.parse_response(response, &context).await?;

        info!(collection, id, "Document deleted");
        Ok(())
    }

    /// Find a category document by slug.
    ///
    /// Categories are addressed by slug in the admin API but stored under
    /// auto-generated IDs, so this is a linear scan over the listing. The
    /// collection holds at most a few dozen documents.
    ///
    /// # Errors
    ///
    /// Returns `FirebaseError::NotFound` if no category carries the slug.
    #[instrument(skip(self))]
    pub async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<AdminDocument, FirebaseError> {
        let documents = self.list("categories").await?;

        category_with_slug(documents, slug)
            .ok_or_else(|| FirebaseError::NotFound(format!("categories (slug {slug})")))
    }
}

/// Select the category document whose stored slug matches `slug`.
///
/// The input is normalized first, so a padded or title-cased slug still
/// matches the canonical stored form. Returns `None` when no document
/// matches, so callers can 404 without issuing a write.
#[must_use]
pub fn category_with_slug(documents: Vec<AdminDocument>, slug: &str) -> Option<AdminDocument> {
    let wanted = hibhana_core::Slug::normalize(slug);

    documents.into_iter().find(|doc| {
        doc.fields
            .get("slug")
            .and_then(Value::as_str)
            .is_some_and(|s| s == wanted)
    })
}

/// Pull the `error.message` out of a Firestore error body, falling back to a
/// truncated raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibhana_core::firestore::{boolean_value, double_value, string_value};

    #[test]
    fn test_admin_document_from_raw() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/products/aZ3xK9pQ",
            "fields": {
                "name": string_value("Royal Maroon Wedding Sherwani"),
                "price": double_value(45000.0),
                "featured": boolean_value(true),
            }
        });

        let decoded = AdminDocument::from_raw(&doc).expect("decodes");
        assert_eq!(decoded.id, "aZ3xK9pQ");
        assert_eq!(decoded.fields["name"], json!("Royal Maroon Wedding Sherwani"));
        assert_eq!(decoded.fields["price"], json!(45000.0));
        assert_eq!(decoded.fields["featured"], json!(true));
    }

    #[test]
    fn test_admin_document_serializes_flat() {
        let doc = AdminDocument {
            id: "c1".to_string(),
            fields: json!({ "title": "Indian Wear" })
                .as_object()
                .expect("object")
                .clone(),
        };

        let serialized = serde_json::to_value(&doc).expect("serializes");
        assert_eq!(serialized, json!({ "id": "c1", "title": "Indian Wear" }));
    }

    fn category(id: &str, slug: &str) -> AdminDocument {
        AdminDocument {
            id: id.to_string(),
            fields: json!({ "slug": slug, "title": slug })
                .as_object()
                .expect("object")
                .clone(),
        }
    }

    #[test]
    fn test_category_with_slug_selects_exactly_the_match() {
        let documents = vec![
            category("c1", "indian-wear"),
            category("c2", "western-wear"),
            category("c3", "indo-western"),
        ];

        let found = category_with_slug(documents, "western-wear").expect("matches");
        assert_eq!(found.id, "c2");
    }

    #[test]
    fn test_category_with_slug_normalizes_the_lookup() {
        let documents = vec![category("c1", "indo-western")];

        let found = category_with_slug(documents, "  Indo Western ").expect("matches");
        assert_eq!(found.id, "c1");
    }

    #[test]
    fn test_category_with_slug_no_match_is_none() {
        let documents = vec![category("c1", "indian-wear")];
        assert!(category_with_slug(documents, "sherwanis").is_none());
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            extract_error_message(body),
            "Missing or insufficient permissions."
        );
    }
}
