use serde::Deserialize;
use serde::Serialize;

/// Public user profile as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_data_wire_format() {
        let data = RegisterData {
            full_name: "Jane Doe".to_string(),
            username: "janedoe".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            dob: None,
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fullName": "Jane Doe",
                "username": "janedoe",
                "email": "jane@x.com",
                "password": "secret1"
            })
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "accessToken": "abc",
            "user": {
                "id": "42",
                "fullName": "Jane Doe",
                "username": "janedoe",
                "email": "jane@x.com"
            }
        }))
        .unwrap();

        assert_eq!(response.access_token, "abc");
        assert_eq!(response.user.full_name, "Jane Doe");
    }
}
