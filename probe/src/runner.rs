/*
 * Responsibility
 * - 1 回だけ GET を送り、結果を report に書き出す
 * - token 未設定: 手順を表示して正常終了 (通信しない)
 * - 200 以外: ステータスを表示して正常終了 / 通信失敗・本文読み込み失敗: ProbeError
 */
use std::io::Write;

use reqwest::{StatusCode, header};
use url::Url;

use crate::cli::Settings;
use crate::error::ProbeError;
use crate::report;

/// How a probe run ended, when it did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MissingToken,
    Rejected(StatusCode),
    Succeeded,
}

pub async fn run(settings: &Settings, out: &mut impl Write) -> Result<Outcome, ProbeError> {
    let Some(token) = settings.token.as_deref() else {
        report::missing_token(out)?;
        return Ok(Outcome::MissingToken);
    };

    report::testing(out, &settings.server_url)?;

    let url = Url::parse(&settings.server_url).map_err(|source| ProbeError::InvalidUrl {
        url: settings.server_url.clone(),
        source,
    })?;

    let client = reqwest::Client::builder()
        .timeout(settings.timeout)
        .build()
        .map_err(ProbeError::Client)?;

    tracing::debug!(%url, timeout = ?settings.timeout, "sending request");

    let resp = client
        .get(url)
        .bearer_auth(token)
        .header(header::CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(ProbeError::Request)?;

    let status = resp.status();
    if status != StatusCode::OK {
        report::failed(out, status, &settings.server_url, &settings.iam_url)?;
        return Ok(Outcome::Rejected(status));
    }

    report::succeeded(out)?;
    let body = resp.bytes().await.map_err(ProbeError::ReadBody)?;
    report::response_body(out, &body)?;

    Ok(Outcome::Succeeded)
}
