use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub has_more: bool,
}

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        return Self {
            success: true,
            message: None,
            data: Some(data),
            pagination: None,
        };
    }

    pub fn paginated(data: T, has_more: bool) -> Self {
        return Self {
            pagination: Some(Pagination { has_more }),
            ..Self::data(data)
        };
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        return Self {
            success: true,
            message: Some(message.to_string()),
            data: None,
            pagination: None,
        };
    }
}
