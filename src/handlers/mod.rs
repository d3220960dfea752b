// Declare the handler modules
pub mod about;
pub mod auth;
pub mod challenges;
pub mod competitions;
pub mod executives;
pub mod gallery;
pub mod hackathons;
pub mod hero;
pub mod projects;
pub mod social_links;
pub mod workshops;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Success envelope: `{"data": ...}`.
#[derive(Serialize, Debug)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        DataResponse { data }
    }
}

/// Envelope for deletes: `{"success": true}`.
#[derive(Serialize, Debug)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        DeleteResponse { success: true }
    }
}

/// Update payloads carry the row id next to the changed columns.
/// `id` stays optional so a missing one maps to 400 rather than 422.
#[derive(Deserialize, Debug)]
pub struct UpdateRequest<T> {
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub changes: T,
}

impl<T> UpdateRequest<T> {
    pub fn id(&self) -> Result<Uuid, ApiError> {
        self.id.ok_or(ApiError::MissingField("id"))
    }
}

/// `?id=` on admin DELETE requests.
#[derive(Deserialize, Debug)]
pub struct IdQuery {
    pub id: Option<Uuid>,
}

impl IdQuery {
    pub fn id(&self) -> Result<Uuid, ApiError> {
        self.id.ok_or(ApiError::MissingField("id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::executives::UpdateExecutive;

    #[test]
    fn update_request_flattens_changes_around_the_id() {
        let body = r#"{"id":"6ff33932-8c72-43a5-9a4a-0b0e68e3dbd3","name":"Ada","grade":12}"#;
        let request: UpdateRequest<UpdateExecutive> = serde_json::from_str(body).unwrap();
        assert!(request.id().is_ok());
        assert_eq!(request.changes.name.as_deref(), Some("Ada"));
        assert_eq!(request.changes.grade, Some(12));
        assert_eq!(request.changes.order_position, None);
    }

    #[test]
    fn update_request_without_id_is_a_missing_field() {
        let request: UpdateRequest<UpdateExecutive> =
            serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert!(matches!(request.id(), Err(ApiError::MissingField("id"))));
    }

    #[test]
    fn delete_response_serializes_success_flag() {
        let body = serde_json::to_string(&DeleteResponse::ok()).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[test]
    fn data_response_wraps_payload_under_data() {
        let body = serde_json::to_string(&DataResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body, r#"{"data":[1,2,3]}"#);
    }
}
