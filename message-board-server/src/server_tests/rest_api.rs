use crate::server_tests::start_test_server;
use crate::server_tests::test_client::TestClient;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
async fn should_list_no_messages_initially() {
	let http_client = start_test_server().await;

	let response = http_client.get("/messages").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let messages = response.json::<Value>().await.expect("Failed to parse messages JSON");
	assert_eq!(json!([]), messages);
}

#[tokio::test]
async fn should_create_message() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"username": "u", "body": "b"}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::CREATED, response.status());
	let message = response.json::<Value>().await.expect("Failed to parse message JSON");
	assert_eq!("u", message["username"]);
	assert_eq!("b", message["body"]);
	assert!(message["id"].is_i64());
	assert!(message["created_at"].is_string());
}

#[tokio::test]
async fn should_accept_empty_strings() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"username": "", "body": ""}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::CREATED, response.status());
}

#[tokio::test]
async fn should_reject_create_without_body() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"username": "u"}))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_reject_create_without_username() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"body": "b"}))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_reject_create_with_null_field() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"username": "u", "body": null}))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_reject_malformed_json() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.header("content-type", "application/json")
		.body("{\"username\": ")
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_reject_missing_request_body() {
	let http_client = start_test_server().await;

	let response = http_client.post("/messages").send().await.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_reject_json_that_is_not_an_object() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!(["u", "b"]))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_not_persist_rejected_messages() {
	let http_client = start_test_server().await;

	let response = http_client
		.post("/messages")
		.json(&json!({"username": "u"}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::BAD_REQUEST, response.status());

	assert_eq!(json!([]), list(&http_client).await);
}

#[tokio::test]
async fn should_list_messages_in_creation_order() {
	let http_client = start_test_server().await;
	let first = create(&http_client, "alice", "first").await;
	let second = create(&http_client, "bob", "second").await;
	let third = create(&http_client, "alice", "third").await;

	let messages = list(&http_client).await;

	assert_eq!(json!([first, second, third]), messages);
	let created_at = messages
		.as_array()
		.expect("Expected an array of messages")
		.iter()
		.map(|message| {
			let created_at = message["created_at"].as_str().expect("Expected created_at string");
			chrono::DateTime::parse_from_rfc3339(created_at).expect("Expected RFC 3339 timestamp")
		})
		.collect::<Vec<_>>();
	assert!(created_at.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn should_list_identical_results_without_writes() {
	let http_client = start_test_server().await;
	create(&http_client, "alice", "hello").await;
	create(&http_client, "bob", "hi").await;

	let first_listing = list(&http_client).await;
	let second_listing = list(&http_client).await;

	assert_eq!(first_listing, second_listing);
}

#[tokio::test]
async fn should_update_message_body() {
	let http_client = start_test_server().await;
	let created = create(&http_client, "alice", "old").await;
	let id = &created["id"];

	let response = http_client
		.patch(&format!("/messages/{id}"))
		.json(&json!({"body": "new"}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let updated = response.json::<Value>().await.expect("Failed to parse message JSON");
	assert_eq!("new", updated["body"]);
	assert_eq!(created["id"], updated["id"]);
	assert_eq!(created["username"], updated["username"]);
	assert_eq!(created["created_at"], updated["created_at"]);
	assert_eq!(json!([updated]), list(&http_client).await);
}

#[tokio::test]
async fn should_reject_update_without_body() {
	let http_client = start_test_server().await;
	let created = create(&http_client, "alice", "old").await;
	let id = &created["id"];

	let response = http_client
		.patch(&format!("/messages/{id}"))
		.json(&json!({"username": "mallory"}))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
	assert_eq!(json!([created]), list(&http_client).await);
}

#[tokio::test]
async fn should_not_update_unknown_message() {
	let http_client = start_test_server().await;

	let response = http_client
		.patch("/messages/42")
		.json(&json!({"body": "new"}))
		.send()
		.await
		.expect("Request failed.");

	assert_message_not_found(response).await;
}

#[tokio::test]
async fn should_not_find_message_with_non_integer_id() {
	let http_client = start_test_server().await;

	let response = http_client
		.patch("/messages/abc")
		.json(&json!({"body": "new"}))
		.send()
		.await
		.expect("Request failed.");

	assert_message_not_found(response).await;
}

#[tokio::test]
async fn should_validate_update_before_looking_up_message() {
	let http_client = start_test_server().await;

	let response = http_client
		.patch("/messages/999")
		.json(&json!({"username": "x"}))
		.send()
		.await
		.expect("Request failed.");

	assert_invalid_input(response).await;
}

#[tokio::test]
async fn should_not_find_message_with_signed_id() {
	let http_client = start_test_server().await;
	let created = create(&http_client, "alice", "old").await;
	assert_eq!(1, created["id"]);

	let update_response = http_client
		.patch("/messages/+1")
		.json(&json!({"body": "plus"}))
		.send()
		.await
		.expect("Request failed.");
	assert_message_not_found(update_response).await;

	let delete_response = http_client.delete("/messages/+1").send().await.expect("Request failed.");
	assert_message_not_found(delete_response).await;

	assert_eq!(json!([created]), list(&http_client).await);
}

#[tokio::test]
async fn should_reject_unsupported_method_on_message() {
	let http_client = start_test_server().await;
	create(&http_client, "alice", "hello").await;

	let response = http_client.get("/messages/1").send().await.expect("Request failed.");

	assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());
}

#[tokio::test]
async fn should_not_find_unknown_path() {
	let http_client = start_test_server().await;

	let response = http_client.get("/nope").send().await.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn should_delete_message() {
	let http_client = start_test_server().await;
	let kept = create(&http_client, "alice", "keep").await;
	let deleted = create(&http_client, "bob", "delete").await;
	let id = &deleted["id"];

	let response = http_client
		.delete(&format!("/messages/{id}"))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NO_CONTENT, response.status());
	assert!(response.bytes().await.expect("Failed to read body").is_empty());
	assert_eq!(json!([kept]), list(&http_client).await);

	let repeated_response = http_client
		.delete(&format!("/messages/{id}"))
		.send()
		.await
		.expect("Request failed.");
	assert_message_not_found(repeated_response).await;
}

#[tokio::test]
async fn should_not_delete_unknown_message() {
	let http_client = start_test_server().await;

	let response = http_client.delete("/messages/42").send().await.expect("Request failed.");

	assert_message_not_found(response).await;
}

#[tokio::test]
async fn should_allow_cross_origin_requests() {
	let http_client = start_test_server().await;

	let response = http_client
		.get("/messages")
		.header("origin", "https://example.com")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!(
		Some("*"),
		response
			.headers()
			.get("access-control-allow-origin")
			.and_then(|value| value.to_str().ok())
	);
}

#[tokio::test]
async fn should_answer_cors_preflight() {
	let http_client = start_test_server().await;

	let response = http_client
		.request(Method::OPTIONS, "/messages/1")
		.header("origin", "https://example.com")
		.header("access-control-request-method", "PATCH")
		.header("access-control-request-headers", "content-type")
		.send()
		.await
		.expect("Request failed.");

	assert!(response.status().is_success());
	assert_eq!(
		Some("*"),
		response
			.headers()
			.get("access-control-allow-origin")
			.and_then(|value| value.to_str().ok())
	);
}

async fn create(http_client: &TestClient, username: &str, body: &str) -> Value {
	let response = http_client
		.post("/messages")
		.json(&json!({"username": username, "body": body}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());

	response.json().await.expect("Failed to parse message JSON")
}

async fn list(http_client: &TestClient) -> Value {
	let response = http_client.get("/messages").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());

	response.json().await.expect("Failed to parse messages JSON")
}

async fn assert_invalid_input(response: reqwest::Response) {
	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!("Invalid input", error["description"]);
}

async fn assert_message_not_found(response: reqwest::Response) {
	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!("Message not found", error["description"]);
}
