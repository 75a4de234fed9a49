//! API Response Envelope
//!
//! Defines the uniform success envelope returned by every endpoint.

use serde::Serialize;

/// 統一レスポンスエンベロープ
///
/// すべてのエンドポイントは成功・失敗を問わず
/// `{ message, data, success }` の形式でレスポンスを返します。
/// 失敗側は [`crate::error::app_error::AppError`] の `IntoResponse` が生成します。
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let res = ApiResponse::new("Login successful", serde_json::json!({"token": "..."}));
/// assert!(res.success);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// ユーザー向けメッセージ
    pub message: String,
    /// レスポンスデータ本体
    pub data: T,
    /// 常に `true`（失敗エンベロープは `AppError` が生成）
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功エンベロープを作成
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            success: true,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// データ無しの成功エンベロープを作成（`data` は空オブジェクト）
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(message, serde_json::json!({}))
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let res = ApiResponse::new("Posts fetched", serde_json::json!({"posts": []}));
        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["message"], "Posts fetched");
        assert_eq!(json["success"], true);
        assert!(json["data"]["posts"].is_array());
    }

    #[test]
    fn test_empty_envelope() {
        let res = ApiResponse::empty("Post deleted");
        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["data"], serde_json::json!({}));
        assert_eq!(json["success"], true);
    }
}
