/// 基本リコンシリエーションハンドラー
///
/// VPCリコンシリエーションLambdaの疎通確認用ハンドラー。
/// 受信イベントをログに記録し、固定の生存応答を返却する。
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::LambdaResponse;

/// 受信イベントを記録して固定レスポンスを返すハンドラー
///
/// イベントの内容は検査せず、JSONシリアライズしてログに残すのみ。
/// レスポンスはイベントの内容に依存しない。
pub struct BasicHandler;

impl BasicHandler {
    /// 新しいBasicHandlerを作成
    pub fn new() -> Self {
        Self
    }

    /// イベントを処理
    ///
    /// # 処理フロー
    /// 1. イベントをJSONシリアライズしてログ出力
    /// 2. 固定の生存応答を構築して返却
    ///
    /// # 引数
    /// * `event` - プラットフォームから渡されたイベントペイロード
    ///
    /// # 戻り値
    /// * 常に固定の生存応答
    ///
    /// ログ出力はベストエフォート。シリアライズに失敗した場合は
    /// WARNログを出力して処理を続行し、生存応答を返却する。
    pub fn handle(&self, event: &Value) -> LambdaResponse {
        match serde_json::to_string(event) {
            Ok(serialized) => {
                info!("Received event: {}", serialized);
            }
            Err(err) => {
                warn!(error = %err, "イベントのシリアライズに失敗（処理続行）");
            }
        }

        LambdaResponse::alive()
    }
}

impl Default for BasicHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::init_test_logging;
    use serde_json::json;

    // ==================== テストヘルパー ====================

    /// テスト用のBasicHandlerを作成
    fn create_test_handler() -> BasicHandler {
        init_test_logging();
        BasicHandler::new()
    }

    // ==================== 固定レスポンステスト ====================

    /// 空オブジェクトのイベントで固定の生存応答を返す
    #[test]
    fn test_handle_empty_event() {
        let handler = create_test_handler();

        let response = handler.handle(&json!({}));

        assert_eq!(response.status_code(), 200);
        assert_eq!(
            response.body(),
            "\"VPC Basic Reconciliation Lambda - Alive!\""
        );
    }

    /// キーを持つイベントでもレスポンスは変化しない
    #[test]
    fn test_handle_event_with_keys() {
        let handler = create_test_handler();

        let response = handler.handle(&json!({"key": "value"}));

        assert_eq!(response, LambdaResponse::alive());
    }

    /// nullイベントでもレスポンスは変化しない
    #[test]
    fn test_handle_null_event() {
        let handler = create_test_handler();

        let response = handler.handle(&Value::Null);

        assert_eq!(response, LambdaResponse::alive());
    }

    /// ネストしたイベントでもレスポンスは変化しない
    #[test]
    fn test_handle_nested_event() {
        let handler = create_test_handler();

        let event = json!({
            "Records": [
                {
                    "eventSource": "aws:ec2",
                    "detail": {
                        "vpc-id": "vpc-0123456789abcdef0",
                        "state": "available"
                    }
                }
            ]
        });

        let response = handler.handle(&event);

        assert_eq!(response, LambdaResponse::alive());
    }

    // ==================== 冪等性テスト ====================

    /// 異なるイベントで繰り返し呼び出してもレスポンスは常に同一
    #[test]
    fn test_handle_is_input_invariant() {
        let handler = create_test_handler();

        let events = [
            json!({}),
            json!({"key": "value"}),
            Value::Null,
            json!([1, 2, 3]),
            json!("plain string"),
            json!(42),
        ];

        for event in &events {
            let response = handler.handle(event);
            assert_eq!(response.status_code(), 200);
            assert_eq!(response, LambdaResponse::alive());
        }
    }

    /// 同一イベントで繰り返し呼び出してもレスポンスは安定
    #[test]
    fn test_handle_repeated_invocations() {
        let handler = create_test_handler();
        let event = json!({"repeat": true});

        let first = handler.handle(&event);
        let second = handler.handle(&event);
        let third = handler.handle(&event);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
