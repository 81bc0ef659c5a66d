/// Remote product collection adapter
///
/// Five operations against the Fake Store API, each a single
/// request/response round trip with no retry. All pagination and
/// filtering is client-side, so the list call always fetches the whole
/// collection.
///
/// Note: the remote service is a demo API; created and updated records
/// are echoed back but not durably stored server-side.

use serde::Serialize;

use super::error::ApiError;
use crate::state::product::{Product, ProductDraft, ProductPatch};

/// Default remote collection endpoint
pub const BASE_URL: &str = "https://fakestoreapi.com/products";

/// PUT body: the record id alongside the draft fields
#[derive(Serialize)]
struct UpdateBody<'a> {
    id: u64,
    #[serde(flatten)]
    draft: &'a ProductDraft,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// GET /products — the full collection
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal ambil data")?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET /products/{id} — one record
    pub async fn fetch_one(&self, id: u64) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal dapat detail")?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST /products — submit a draft, returns the created record with
    /// its server-assigned id
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal simpan produk")?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// PUT /products/{id} — returns the fields the server echoed back,
    /// which may be a subset of the full record
    pub async fn update(&self, id: u64, draft: &ProductDraft) -> Result<ProductPatch, ApiError> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(&UpdateBody { id, draft })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal update produk")?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// DELETE /products/{id} — only the status matters
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal hapus produk")?;
        Ok(())
    }

    /// Download a product image for display in the card grid. Callers
    /// treat failures as "keep showing the placeholder".
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(&response, "gagal ambil gambar")?;

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn check_status(response: &reqwest::Response, context: &str) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            context: context.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::product::ProductDraft;

    #[test]
    fn item_url_appends_the_id() {
        let client = ApiClient::with_base_url("https://fakestoreapi.com/products");
        assert_eq!(client.item_url(7), "https://fakestoreapi.com/products/7");
    }

    #[test]
    fn update_body_flattens_draft_next_to_id() {
        let draft = ProductDraft {
            title: "Topi".into(),
            price: 5.5,
            description: "Topi hitam".into(),
            category: "aksesoris".into(),
            image: "https://example.com/topi.jpg".into(),
        };
        let body = serde_json::to_value(UpdateBody { id: 3, draft: &draft }).unwrap();

        assert_eq!(body["id"], 3);
        assert_eq!(body["title"], "Topi");
        assert_eq!(body["price"], 5.5);
        // The draft has no rating; the body must not invent one
        assert!(body.get("rating").is_none());
    }
}
