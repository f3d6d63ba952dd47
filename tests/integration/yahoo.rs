//! Provider integration tests against a mocked chart/quoteSummary API.

use serde_json::json;
use stocklens::models::Period;
use stocklens::services::market_data::{MarketDataError, MarketDataProvider};
use stocklens::services::yahoo::YahooFinanceProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body(timestamps: &[i64], closes: &[serde_json::Value]) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": closes,
                        "high": closes,
                        "low": closes,
                        "close": closes,
                        "volume": closes.iter().map(|_| json!(1_000_000.0)).collect::<Vec<_>>(),
                    }]
                }
            }],
            "error": null
        }
    })
}

const DAY: i64 = 86_400;

#[tokio::test]
async fn fetch_bars_parses_chart_response() {
    let mock = MockServer::start().await;
    let timestamps = [1_700_000_000, 1_700_000_000 + DAY, 1_700_000_000 + 2 * DAY];
    let closes = vec![json!(101.5), json!(102.25), json!(103.0)];
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("range", "1y"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&timestamps, &closes)))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let bars = provider.fetch_bars("AAPL", Period::OneYear).await.unwrap();

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].close, 101.5);
    assert_eq!(bars[2].close, 103.0);
    assert!(bars[0].timestamp < bars[1].timestamp);
}

#[tokio::test]
async fn fetch_bars_skips_null_rows() {
    let mock = MockServer::start().await;
    let timestamps = [1_700_000_000, 1_700_000_000 + DAY, 1_700_000_000 + 2 * DAY];
    // Middle row is a halt: close is null, the row must be dropped.
    let closes = vec![json!(101.5), json!(null), json!(103.0)];
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/HALT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&timestamps, &closes)))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let bars = provider.fetch_bars("HALT", Period::OneYear).await.unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].close, 101.5);
    assert_eq!(bars[1].close, 103.0);
}

#[tokio::test]
async fn fetch_bars_maps_chart_error_to_unknown_symbol() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        })))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let err = provider.fetch_bars("NOPE", Period::OneYear).await.unwrap_err();
    assert!(matches!(err, MarketDataError::UnknownSymbol(s) if s == "NOPE"));
}

#[tokio::test]
async fn fetch_bars_maps_http_404_to_unknown_symbol() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GONE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let err = provider.fetch_bars("GONE", Period::OneYear).await.unwrap_err();
    assert!(matches!(err, MarketDataError::UnknownSymbol(s) if s == "GONE"));
}

#[tokio::test]
async fn fetch_bars_rejects_all_null_series() {
    let mock = MockServer::start().await;
    let timestamps = [1_700_000_000, 1_700_000_000 + DAY];
    let closes = vec![json!(null), json!(null)];
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/VOID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&timestamps, &closes)))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let err = provider.fetch_bars("VOID", Period::OneYear).await.unwrap_err();
    assert!(matches!(err, MarketDataError::EmptySeries(_)));
}

#[tokio::test]
async fn fetch_bars_rejects_unordered_timestamps() {
    let mock = MockServer::start().await;
    let timestamps = [1_700_000_000 + DAY, 1_700_000_000];
    let closes = vec![json!(101.0), json!(102.0)];
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/SWAP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&timestamps, &closes)))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let err = provider.fetch_bars("SWAP", Period::OneYear).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Malformed(_)));
}

#[tokio::test]
async fn fetch_bars_rejects_malformed_payload() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/JUNK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": { "result": [{}], "error": null }
        })))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let err = provider.fetch_bars("JUNK", Period::OneYear).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Malformed(_)));
}

#[tokio::test]
async fn fetch_fundamentals_parses_and_normalizes() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quoteSummary": {
                "result": [{
                    "summaryDetail": {
                        "trailingPE": { "raw": 31.247, "fmt": "31.25" },
                        "dividendYield": { "raw": 0.0055, "fmt": "0.55%" },
                        "marketCap": { "raw": 2.75e12, "fmt": "2.75T" },
                        "fiftyTwoWeekHigh": { "raw": 237.49 },
                        "beta": { "raw": 1.29 }
                    },
                    "defaultKeyStatistics": {
                        "priceToBook": { "raw": 48.1 },
                        "trailingEps": { "raw": 6.57 }
                    },
                    "financialData": {
                        "revenueGrowth": { "raw": 0.049 },
                        "returnOnEquity": { "raw": 1.474 },
                        "profitMargins": { "raw": 0.262 }
                    }
                }],
                "error": null
            }
        })))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let fundamentals = provider.fetch_fundamentals("AAPL").await.unwrap();

    assert_eq!(fundamentals.pe_ratio, Some(31.25));
    // Fractions arrive as ratios and come back as percentages.
    assert_eq!(fundamentals.dividend_yield, Some(0.55));
    assert_eq!(fundamentals.revenue_growth, Some(4.9));
    assert_eq!(fundamentals.profit_margin, Some(26.2));
    // Already above 1.0 in ratio form, so only rounded.
    assert_eq!(fundamentals.roe, Some(1.47));
    assert_eq!(fundamentals.market_cap, Some(2.75e12));
    assert_eq!(fundamentals.market_cap_display().unwrap(), "$2.75T");
}

#[tokio::test]
async fn fetch_fundamentals_tolerates_missing_modules() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/BARE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quoteSummary": { "result": [{}], "error": null }
        })))
        .mount(&mock)
        .await;

    let provider = YahooFinanceProvider::with_base_url(mock.uri());
    let fundamentals = provider.fetch_fundamentals("BARE").await.unwrap();
    assert_eq!(fundamentals, stocklens::models::Fundamentals::default());
}
