#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::routes::{routes, routes_with_clock};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use barber_config::{AppConfig, ShopConfig};
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_mock_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            shop: ShopConfig {
                name: "ToTa Barbers".to_string(),
                time_zone: "Europe/London".to_string(),
                submission_delay_ms: 1000,
            },
            ..Default::default()
        })
    }

    // Thursday 2025-04-24 at 11:00 shop time.
    fn app() -> Router {
        let now = NaiveDate::from_ymd_opt(2025, 4, 24)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        routes_with_clock(create_mock_config(), Arc::new(FixedClock::new(now)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_slots_today_marks_past_times() {
        let (status, body) = get_json(app(), "/booking/slots?date=2025-04-24").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2025-04-24");
        assert_eq!(body["closed"], false);

        let slots = body["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 16);
        let slot = |label: &str| {
            slots
                .iter()
                .find(|s| s["time"] == label)
                .cloned()
                .unwrap()
        };
        assert_eq!(slot("10:30")["status"], "past");
        assert_eq!(slot("10:30")["available"], false);
        assert_eq!(slot("11:00")["status"], "available");
        assert_eq!(slot("11:00")["available"], true);
    }

    #[tokio::test]
    async fn test_slots_default_to_today() {
        let (status, body) = get_json(app(), "/booking/slots").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2025-04-24");
    }

    #[tokio::test]
    async fn test_slots_on_sunday_are_closed() {
        let (status, body) = get_json(app(), "/booking/slots?date=2025-04-27").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["closed"], true);
        assert!(body["slots"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["status"] == "closed" && s["available"] == false));
    }

    #[tokio::test]
    async fn test_bad_date_is_bad_request() {
        let (status, body) = get_json(app(), "/booking/slots?date=24-04-2025").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("YYYY-MM-DD"));
    }

    #[tokio::test]
    async fn test_calendar_month() {
        let (status, body) = get_json(app(), "/booking/calendar?year=2025&month=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["header"][6]["label"], "SUN");
        assert_eq!(body["header"][6]["closed"], true);

        let first_week = body["weeks"][0].as_array().unwrap();
        assert!(first_week[0].is_null());
        assert_eq!(first_week[1]["date"], "2025-04-01");
        assert_eq!(first_week[1]["disabled"], true);

        // Thursday 24th is today, Sunday 27th is closed.
        let fourth_week = body["weeks"][3].as_array().unwrap();
        assert_eq!(fourth_week[3]["today"], true);
        assert_eq!(fourth_week[3]["disabled"], false);
        assert_eq!(fourth_week[6]["disabled"], true);
        assert_eq!(fourth_week[6]["closed"], true);
    }

    #[tokio::test]
    async fn test_calendar_rejects_invalid_month() {
        let (status, _) = get_json(app(), "/booking/calendar?year=2025&month=13").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_calendar_at_the_end_of_the_date_range() {
        let (status, body) = get_json(app(), "/booking/calendar?year=262142&month=12").await;
        assert_eq!(status, StatusCode::OK);
        let last_week = body["weeks"].as_array().unwrap().last().unwrap().clone();
        assert!(last_week
            .as_array()
            .unwrap()
            .iter()
            .any(|tile| tile["day"] == 31));

        let (status, body) = get_json(app(), "/booking/calendar?year=262143&month=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 400);
    }

    #[tokio::test]
    async fn test_route_table() {
        let (status, body) = get_json(app(), "/booking/routes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "ToTa Barbers");
        let routes = body["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 8);
        assert_eq!(routes[0]["path"], "/");
        assert_eq!(routes[7]["path"], "/booking-confirmation");
    }

    #[test]
    fn test_unknown_time_zone_fails_router_setup() {
        let mut config = (*create_mock_config()).clone();
        config.shop.time_zone = "Nowhere/Atlantis".to_string();
        assert!(routes(Arc::new(config)).is_err());
        assert!(routes(create_mock_config()).is_ok());
    }
}
