//! Unit tests for chart payload decoding

use market_sentinel::services::yahoo::messages::ChartResponse;
use market_sentinel::services::yahoo::YahooRestClient;
use serde_json::json;

#[test]
fn test_into_bars_drops_incomplete_samples() {
    let payload = json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "TSLA" },
                "timestamp": [1753277400, 1753277460, 1753277520],
                "indicators": { "quote": [{
                    "open":   [250.0, null, 251.0],
                    "high":   [251.0, 252.0, 252.5],
                    "low":    [249.5, 250.5, 250.8],
                    "close":  [250.5, 251.5, 252.0],
                    "volume": [120000, 90000, 80000]
                }]}
            }],
            "error": null
        }
    });

    let response: ChartResponse = serde_json::from_value(payload).unwrap();
    let result = response.chart.result.unwrap().remove(0);
    let bars = result.into_bars();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, 250.0);
    assert_eq!(bars[1].close, 252.0);
    assert_eq!(bars[1].volume, 80_000.0);
    assert_eq!(bars[0].timestamp.timestamp(), 1753277400);
}

#[test]
fn test_session_without_samples() {
    let payload = json!({
        "chart": {
            "result": [{ "meta": {}, "indicators": { "quote": [{}] } }],
            "error": null
        }
    });
    let response: ChartResponse = serde_json::from_value(payload).unwrap();
    let result = response.chart.result.unwrap().remove(0);
    assert!(result.into_bars().is_empty());
}

#[test]
fn test_chart_url() {
    let client = YahooRestClient::with_client("http://localhost:9000/", reqwest::Client::new());
    let url = client.chart_url("TSLA", "30d", "1d").unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:9000/v8/finance/chart/TSLA?range=30d&interval=1d"
    );
}
