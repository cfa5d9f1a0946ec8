use reqwest::Method;

use crate::common::{TestApp, routes, seed_movies, test_config};

mod any_origin {
    use super::*;

    #[tokio::test]
    async fn simple_request_allows_any_origin() {
        let app = TestApp::spawn().await;

        let res = app
            .request_with_headers(
                Method::GET,
                routes::MOVIES,
                &[("Origin", "http://localhost:8080")],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
    }

    #[tokio::test]
    async fn preflight_allows_patch_and_delete() {
        let app = TestApp::spawn().await;

        let res = app
            .request_with_headers(
                Method::OPTIONS,
                &routes::movie("some-id"),
                &[
                    ("Origin", "https://movies.com"),
                    ("Access-Control-Request-Method", "DELETE"),
                ],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
        let methods = res
            .header("access-control-allow-methods")
            .expect("allow-methods header");
        assert!(methods.contains("PATCH"));
        assert!(methods.contains("DELETE"));
        assert_eq!(res.header("access-control-max-age"), Some("3600"));
    }

    #[tokio::test]
    async fn not_found_responses_carry_cors_headers() {
        let app = TestApp::spawn().await;

        let res = app
            .request_with_headers(
                Method::GET,
                &routes::movie("missing"),
                &[("Origin", "http://localhost:8080")],
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
    }
}

mod allow_list {
    use super::*;

    async fn spawn_restricted() -> TestApp {
        TestApp::spawn_with(
            seed_movies(),
            test_config(vec![
                "http://localhost:8080".to_string(),
                "https://movies.com".to_string(),
            ]),
        )
        .await
    }

    #[tokio::test]
    async fn listed_origin_is_echoed() {
        let app = spawn_restricted().await;

        let res = app
            .request_with_headers(
                Method::GET,
                routes::MOVIES,
                &[("Origin", "https://movies.com")],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.header("access-control-allow-origin"),
            Some("https://movies.com")
        );
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_allow_header() {
        let app = spawn_restricted().await;

        let res = app
            .request_with_headers(
                Method::GET,
                routes::MOVIES,
                &[("Origin", "https://evil.example")],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header("access-control-allow-origin"), None);
    }
}
