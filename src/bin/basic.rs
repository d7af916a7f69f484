/// 基本リコンシリエーションLambdaエントリーポイント
///
/// 受信イベントをログに記録し、固定の生存応答を返却する
/// 疎通確認用のLambda関数。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use vpc_reconciler::application::BasicHandler;
use vpc_reconciler::infrastructure::init_logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. BasicHandlerで受信イベントをログに記録
/// 2. 固定の200応答を返却
///
/// イベントの内容と呼び出しコンテキストはレスポンスに影響しない。
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let basic_handler = BasicHandler::new();
    let response = basic_handler.handle(&event.payload);
    Ok(response.to_json())
}
