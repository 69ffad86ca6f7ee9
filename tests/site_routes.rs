//! Integration tests for the served route surface.

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn all_declared_routes_serve_their_page() {
    let (addr, shutdown) = common::start_site().await;
    let client = common::client();

    let expected = [
        ("/", "Solidity Smart Contract Vulnerabilities"),
        ("/access", "Access Control in Solidity Smart Contracts"),
        (
            "/arithmetic",
            "Arithmetic Over/Under Flows in Ethereum Smart Contracts",
        ),
        ("/reentrancy", "Re-Entrancy in Ethereum Smart Contracts"),
        (
            "/unchecked",
            "Unchecked CALL Return Values in Ethereum Smart Contracts",
        ),
        ("/others", "1.Denial of Service (DOS) Attacks in Smart Contracts"),
    ];

    for (path, title) in expected {
        let res = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .expect("site unreachable");
        assert_eq!(res.status(), StatusCode::OK, "{path}");

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        assert!(
            content_type.starts_with("text/html"),
            "{path} served {content_type}"
        );

        let body = res.text().await.unwrap();
        assert!(
            body.contains(&format!("<h1>{title}</h1>")),
            "{path} is missing its title"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_path_gets_the_fallback() {
    let (addr, shutdown) = common::start_site().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/unknown-path"))
        .send()
        .await
        .expect("site unreachable");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.text().await.unwrap();
    assert!(body.contains("Page Not Found"));
    // the navigation shell survives the fallback
    assert!(body.contains("href=\"/access\""));

    shutdown.trigger();
}

#[tokio::test]
async fn repeated_requests_return_identical_pages() {
    let (addr, shutdown) = common::start_site().await;
    let client = common::client();

    let url = format!("http://{addr}/reentrancy");
    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();
    assert_eq!(first, second);
    assert!(first.contains("EtherStore"));

    shutdown.trigger();
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let (addr, shutdown) = common::start_site().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/access"))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(
        res.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(res.headers().get("x-frame-options").unwrap(), "DENY");

    // an inbound request id is echoed back unchanged
    let res = client
        .get(format!("http://{addr}/access"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let (addr, shutdown) = common::start_site().await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/access"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    shutdown.trigger();
}
