#[cfg(test)]
mod cross_endpoint_tests {
    use crate::routes;
    use actix_web::{App, test};
    use futures::future::join_all;

    const HOME_BODY: &str = r#"{"message":"Notification Service API","version":"1.0.0"}"#;
    const NOTIFICATIONS_BODY: &str =
        r#"{"notifications":[],"message":"Notifications endpoint working"}"#;

    #[actix_web::test]
    async fn test_unknown_path_returns_not_found() {
        let app = test::init_service(App::new().configure(routes::configure)).await;

        let req = test::TestRequest::get().uri("/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);

        // The default not-found response carries none of the defined bodies
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert_ne!(body_str, HOME_BODY);
        assert_ne!(body_str, NOTIFICATIONS_BODY);
    }

    #[actix_web::test]
    async fn test_all_methods_share_one_home_response() {
        let app = test::init_service(App::new().configure(routes::configure)).await;

        let requests = vec![
            test::TestRequest::get().uri("/").to_request(),
            test::TestRequest::post().uri("/").to_request(),
            test::TestRequest::put().uri("/").to_request(),
            test::TestRequest::delete().uri("/").to_request(),
        ];

        for req in requests {
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(std::str::from_utf8(&body).unwrap(), HOME_BODY);
        }
    }

    #[actix_web::test]
    async fn test_concurrent_requests_stay_independent() {
        let app = test::init_service(App::new().configure(routes::configure)).await;

        // 100 simultaneous calls spread across the three endpoints
        let calls = (0..100).map(|i| {
            let uri = match i % 3 {
                0 => "/",
                1 => "/health",
                _ => "/notifications",
            };
            test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request())
        });

        let bodies = join_all(calls).await;

        for (i, body) in bodies.iter().enumerate() {
            let body_str = std::str::from_utf8(body).unwrap();
            match i % 3 {
                0 => assert_eq!(body_str, HOME_BODY),
                1 => {
                    let json: serde_json::Value = serde_json::from_str(body_str).unwrap();
                    assert_eq!(json["status"], "healthy");
                    assert_eq!(json["service"], "notification-service");
                }
                _ => assert_eq!(body_str, NOTIFICATIONS_BODY),
            }
        }
    }

    #[actix_web::test]
    async fn test_fresh_instances_serve_identical_bodies() {
        // Two independently built service instances answer byte-for-byte
        // identically for the constant-bodied endpoints
        let first = test::init_service(App::new().configure(routes::configure)).await;
        let second = test::init_service(App::new().configure(routes::configure)).await;

        for uri in ["/", "/notifications"] {
            let body_first =
                test::call_and_read_body(&first, test::TestRequest::get().uri(uri).to_request())
                    .await;
            let body_second =
                test::call_and_read_body(&second, test::TestRequest::get().uri(uri).to_request())
                    .await;
            assert_eq!(body_first, body_second);
        }
    }
}
