//! End-to-end sign-up tests against a mock backend.

use classroom_business::{
    ApiError, BusinessConfig, Field, HttpRegistrationApi, KeyValueStore as _, MemoryStore,
    Notification, NotificationLog, Panel, RegistrationApi as _, RegistrationController,
    RegistrationError, RegistrationRequest, Route, RouteRecorder, sha512_hex, storage::keys,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestContext {
    mock_server: MockServer,
    store: MemoryStore,
    notifications: NotificationLog,
    routes: RouteRecorder,
}

impl TestContext {
    async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
            store: MemoryStore::new(),
            notifications: NotificationLog::new(),
            routes: RouteRecorder::new(),
        }
    }

    fn api(&self) -> HttpRegistrationApi {
        HttpRegistrationApi::new(BusinessConfig::new(self.mock_server.uri()))
    }

    fn controller(
        &self,
    ) -> RegistrationController<HttpRegistrationApi, MemoryStore, NotificationLog, RouteRecorder>
    {
        let mut controller = RegistrationController::new(
            self.api(),
            self.store.clone(),
            self.notifications.clone(),
            self.routes.clone(),
        );
        controller.set_field(Field::Firstname, "Grace");
        controller.set_field(Field::Lastname, "Hopper");
        controller.set_field(Field::Username, "grace");
        controller.set_field(Field::Email, "grace@navy.mil");
        controller.set_field(Field::Password, "cobol");
        controller.set_field(Field::ConfirmPassword, "cobol");
        controller
    }

    fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("memory store never fails")
    }
}

fn expected_body(role: &str) -> serde_json::Value {
    json!({
        "firstname": "Grace",
        "lastname": "Hopper",
        "username": "grace",
        "email": "grace@navy.mil",
        "password": sha512_hex("cobol"),
        "role": role,
    })
}

#[tokio::test]
async fn test_student_registration_success() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/student/register"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_body("student")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let outcome = ctx
        .controller()
        .handle_registration("student")
        .await
        .expect("registration should succeed");

    assert_eq!(outcome.panel, Panel::Student);
    assert_eq!(outcome.token, "abc");
    assert_eq!(ctx.stored(keys::USERNAME), Some("grace".to_owned()));
    assert_eq!(ctx.stored(keys::EMAIL), Some("grace@navy.mil".to_owned()));
    assert_eq!(ctx.stored(keys::TOKEN), Some("abc".to_owned()));
    assert_eq!(ctx.routes.current(), Route::StudentLogin);
    assert_eq!(
        ctx.notifications.entries(),
        vec![Notification::Success(
            "Student registration successful!".to_owned()
        )]
    );
}

#[tokio::test]
async fn test_teacher_registration_success() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/teacher/register"))
        .and(body_json(expected_body("teacher")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "t-1" })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let outcome = ctx
        .controller()
        .handle_registration("teacher")
        .await
        .expect("registration should succeed");

    assert_eq!(outcome.route, Route::TeacherLogin);
    assert_eq!(ctx.stored(keys::TOKEN), Some("t-1".to_owned()));
}

#[tokio::test]
async fn test_admin_registration_failure_keeps_identity() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/register"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database down" })),
        )
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let err = ctx
        .controller()
        .handle_registration("admin")
        .await
        .expect_err("server error must surface");

    match err {
        RegistrationError::Backend {
            panel: Panel::Admin,
            source: ApiError::Status { status, message },
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(
        ctx.notifications.entries(),
        vec![Notification::Error(
            "Admin registration failed. Please try again.".to_owned()
        )]
    );
    assert_eq!(ctx.stored(keys::USERNAME), Some("grace".to_owned()));
    assert_eq!(ctx.stored(keys::EMAIL), Some("grace@navy.mil".to_owned()));
    assert_eq!(ctx.stored(keys::TOKEN), None);
    assert!(ctx.routes.history().is_empty());
}

#[tokio::test]
async fn test_unknown_role_stores_identity_but_sends_nothing() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    let err = ctx
        .controller()
        .handle_registration("unknownrole")
        .await
        .expect_err("unknown role has no endpoint");

    assert!(matches!(err, RegistrationError::UnsupportedRole(_)));
    assert!(ctx.notifications.is_empty());
    assert_eq!(ctx.stored(keys::USERNAME), Some("grace".to_owned()));
    assert_eq!(ctx.stored(keys::EMAIL), Some("grace@navy.mil".to_owned()));
    assert_eq!(ctx.stored(keys::TOKEN), None);
}

#[tokio::test]
async fn test_api_error_without_body_uses_default_message() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/teacher/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&ctx.mock_server)
        .await;

    let request = RegistrationRequest {
        firstname: "Grace".to_owned(),
        lastname: "Hopper".to_owned(),
        username: "grace".to_owned(),
        email: "grace@navy.mil".to_owned(),
        password: sha512_hex("cobol"),
        role: "teacher".to_owned(),
    };

    let err = ctx
        .api()
        .teacher_register(&request)
        .await
        .expect_err("conflict must be an error");

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "teacher registration failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_rejects_undecodable_and_empty_tokens() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/student/register"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&ctx.mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "" })))
        .mount(&ctx.mock_server)
        .await;

    let request = RegistrationRequest {
        firstname: "Grace".to_owned(),
        lastname: "Hopper".to_owned(),
        username: "grace".to_owned(),
        email: "grace@navy.mil".to_owned(),
        password: sha512_hex("cobol"),
        role: "student".to_owned(),
    };

    let api = ctx.api();
    assert!(matches!(
        api.student_register(&request).await,
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(
        api.admin_register(&request).await,
        Err(ApiError::Rejected(_))
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    let api = HttpRegistrationApi::new(BusinessConfig::new("http://127.0.0.1:9"));
    let request = RegistrationRequest {
        firstname: "Grace".to_owned(),
        lastname: "Hopper".to_owned(),
        username: "grace".to_owned(),
        email: "grace@navy.mil".to_owned(),
        password: sha512_hex("cobol"),
        role: "admin".to_owned(),
    };

    assert!(matches!(
        api.admin_register(&request).await,
        Err(ApiError::Http(_))
    ));
}
