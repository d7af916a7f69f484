/// Lambdaレスポンスモデル
///
/// API Gateway / 呼び出し元プラットフォームがHTTPレスポンスとして
/// 解釈する固定形式のレコードを定義する。
use serde::Serialize;
use serde_json::{Value, json};

/// 生存確認メッセージ（レスポンスボディの元になる固定文字列）
pub const ALIVE_MESSAGE: &str = "VPC Basic Reconciliation Lambda - Alive!";

/// Lambda関数のHTTP形式レスポンス
///
/// ステータスコードとボディの2フィールドのみを持つ。
/// ボディはJSONエンコード済み文字列（プラットフォームがそのまま
/// HTTPボディとして返却する）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LambdaResponse {
    /// HTTPステータスコード
    #[serde(rename = "statusCode")]
    status_code: u16,
    /// レスポンスボディ（JSONエンコード済み文字列）
    body: String,
}

impl LambdaResponse {
    /// 固定の生存応答を作成
    ///
    /// ステータスコードは常に200、ボディは生存確認メッセージを
    /// JSON文字列としてエンコードしたもの。
    pub fn alive() -> Self {
        Self {
            status_code: 200,
            body: json!(ALIVE_MESSAGE).to_string(),
        }
    }

    /// レスポンスをLambdaランタイムに返却するJSON値に変換
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(json!(null))
    }

    /// HTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// レスポンスボディを取得
    pub fn body(&self) -> &str {
        &self.body
    }
}
