use std::sync::Arc;

use serde_json::json;

use ems_shared::config::NotFoundDetection;

use crate::domain::entities::Employee;
use crate::errors::{messages, DomainError};
use crate::services::employee::mock::{GatewayCall, MockEmployeeExporter, MockEmployeeGateway};
use crate::services::employee::{EmployeeService, EmployeeServiceConfig, UpstreamResponse};

type TestService = EmployeeService<MockEmployeeGateway, MockEmployeeExporter>;

fn service_with(gateway: MockEmployeeGateway) -> (TestService, Arc<MockEmployeeGateway>, Arc<MockEmployeeExporter>) {
    service_with_config(gateway, EmployeeServiceConfig::default())
}

fn service_with_config(
    gateway: MockEmployeeGateway,
    config: EmployeeServiceConfig,
) -> (TestService, Arc<MockEmployeeGateway>, Arc<MockEmployeeExporter>) {
    let gateway = Arc::new(gateway);
    let exporter = Arc::new(MockEmployeeExporter::default());
    let service = EmployeeService::new(gateway.clone(), exporter.clone(), config);
    (service, gateway, exporter)
}

fn status_code_detection() -> EmployeeServiceConfig {
    EmployeeServiceConfig {
        not_found_detection: NotFoundDetection::StatusCode,
    }
}

fn staff() -> Vec<Employee> {
    vec![
        Employee::named("Ada").with_id(1).with_status("active"),
        Employee::named("Grace").with_id(2).with_email("grace@example.com"),
    ]
}

fn validation(message: &str) -> DomainError {
    DomainError::validation(message)
}

#[tokio::test]
async fn test_get_all_returns_decoded_list_unchanged() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&staff()));

    let employees = service.get_all().await.unwrap();

    assert_eq!(employees, staff());
    assert_eq!(gateway.calls(), vec![GatewayCall::List]);
}

#[tokio::test]
async fn test_get_all_empty_or_null_body_is_error_occured() {
    for body in ["", "null", "{\"data\": []}"] {
        let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok(body)));

        let error = service.get_all().await.unwrap_err();

        assert_eq!(error, DomainError::decode(messages::ERROR_OCCURED), "body: {body:?}");
    }
}

#[tokio::test]
async fn test_get_all_does_not_interpret_not_found() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));

    let error = service.get_all().await.unwrap_err();

    assert_eq!(
        error,
        DomainError::Upstream {
            status: 404,
            reason: "Not Found".to_string()
        }
    );
    assert!(!error.is_client_error());
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let (service, _, _) = service_with(MockEmployeeGateway::unreachable());

    let error = service.get_all().await.unwrap_err();

    assert!(matches!(error, DomainError::Transport { .. }));
}

#[tokio::test]
async fn test_get_by_id_rejects_non_positive_ids_without_calling_upstream() {
    for id in [0, -1, i64::MIN] {
        let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&json!({"id": 1})));

        let error = service.get_by_id(id).await.unwrap_err();

        assert_eq!(error, validation(messages::INVALID_EMPLOYEE_ID));
        assert!(gateway.calls().is_empty());
    }
}

#[tokio::test]
async fn test_get_by_id_returns_record() {
    let (service, gateway, _) =
        service_with(MockEmployeeGateway::ok_json(&json!({"id": 7, "name": "Ada"})));

    let employee = service.get_by_id(7).await.unwrap();

    assert_eq!(employee, Employee::named("Ada").with_id(7));
    assert_eq!(gateway.calls(), vec![GatewayCall::Get(7)]);
}

#[tokio::test]
async fn test_get_by_id_not_found_by_reason_phrase() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));

    assert_eq!(service.get_by_id(99).await.unwrap_err(), DomainError::NotFound);
}

#[tokio::test]
async fn test_reason_phrase_match_ignores_status_code() {
    // A success status carrying the phrase still counts as not found
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        200,
        "Not Found",
        r#"{"id": 3}"#,
    )));

    assert_eq!(service.get_by_id(3).await.unwrap_err(), DomainError::NotFound);
}

#[tokio::test]
async fn test_reason_phrase_match_is_exact() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        404,
        "Resource Missing",
        "",
    )));

    let error = service.get_by_id(3).await.unwrap_err();

    assert_eq!(
        error,
        DomainError::Upstream {
            status: 404,
            reason: "Resource Missing".to_string()
        }
    );
}

#[tokio::test]
async fn test_status_code_detection() {
    let (service, _, _) = service_with_config(
        MockEmployeeGateway::new(UpstreamResponse::new(404, "Resource Missing", "")),
        status_code_detection(),
    );
    assert_eq!(service.get_by_id(3).await.unwrap_err(), DomainError::NotFound);

    let (service, _, _) = service_with_config(
        MockEmployeeGateway::new(UpstreamResponse::new(200, "Not Found", r#"{"id": 3}"#)),
        status_code_detection(),
    );
    assert_eq!(service.get_by_id(3).await.unwrap(), Employee::default().with_id(3));
}

#[tokio::test]
async fn test_get_by_id_other_failures_are_unhandled() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        500,
        "Internal Server Error",
        "",
    )));

    let error = service.get_by_id(3).await.unwrap_err();

    assert!(matches!(error, DomainError::Upstream { status: 500, .. }));
}

#[tokio::test]
async fn test_get_by_id_undecodable_body_is_not_found() {
    for body in ["", "null", "\"Ada\""] {
        let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok(body)));

        let error = service.get_by_id(3).await.unwrap_err();

        assert_eq!(error, DomainError::decode(messages::NOT_FOUND), "body: {body:?}");
    }
}

#[tokio::test]
async fn test_get_by_first_name_requires_a_name() {
    for name in [None, Some("")] {
        let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&staff()));

        let error = service.get_by_first_name(name).await.unwrap_err();

        assert_eq!(error, validation(messages::ERROR_OCCURED));
        assert!(gateway.calls().is_empty());
    }
}

#[tokio::test]
async fn test_get_by_first_name_returns_matches() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&staff()));

    let employees = service.get_by_first_name(Some("Ada")).await.unwrap();

    assert_eq!(employees, staff());
    assert_eq!(gateway.calls(), vec![GatewayCall::FindByName("Ada".to_string())]);
}

#[tokio::test]
async fn test_get_by_first_name_decode_failure_and_unhandled_not_found() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok("null")));
    assert_eq!(
        service.get_by_first_name(Some("Ada")).await.unwrap_err(),
        DomainError::decode(messages::NOT_FOUND)
    );

    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));
    assert!(matches!(
        service.get_by_first_name(Some("Ada")).await.unwrap_err(),
        DomainError::Upstream { status: 404, .. }
    ));
}

#[tokio::test]
async fn test_delete_by_id() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        204,
        "No Content",
        "",
    )));

    service.delete_by_id(5).await.unwrap();

    assert_eq!(gateway.calls(), vec![GatewayCall::Delete(5)]);
}

#[tokio::test]
async fn test_delete_by_id_rejects_non_positive_ids() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok("")));

    assert_eq!(
        service.delete_by_id(0).await.unwrap_err(),
        validation(messages::ENTER_EMPLOYEE_ID)
    );
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_delete_by_id_failure_carries_upstream_reason() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));

    assert_eq!(
        service.delete_by_id(5).await.unwrap_err(),
        DomainError::Rejected {
            reason: "Not Found".to_string()
        }
    );
}

#[tokio::test]
async fn test_update_by_id_echoes_upstream_record() {
    let returned = json!({"id": 5, "name": "Ada L.", "status": "inactive"});
    let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&returned));
    let body = Employee::named("Ada L.").with_status("inactive");

    let employee = service.update_by_id(5, Some(body.clone())).await.unwrap();

    assert_eq!(serde_json::to_value(&employee).unwrap(), returned);
    assert_eq!(gateway.calls(), vec![GatewayCall::Update(5, body)]);
}

#[tokio::test]
async fn test_update_by_id_requires_id_and_body() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&json!({"id": 5})));

    assert_eq!(
        service.update_by_id(0, Some(Employee::named("Ada"))).await.unwrap_err(),
        validation(messages::ENTER_EMPLOYEE_ID)
    );
    assert_eq!(
        service.update_by_id(5, None).await.unwrap_err(),
        validation(messages::ENTER_EMPLOYEE_ID)
    );
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_update_by_id_not_found_and_decode_failure() {
    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));
    assert_eq!(
        service.update_by_id(5, Some(Employee::named("Ada"))).await.unwrap_err(),
        DomainError::NotFound
    );

    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok("")));
    assert_eq!(
        service.update_by_id(5, Some(Employee::named("Ada"))).await.unwrap_err(),
        DomainError::decode(messages::NOT_FOUND)
    );
}

#[tokio::test]
async fn test_create_echoes_upstream_record() {
    let (service, gateway, _) =
        service_with(MockEmployeeGateway::ok_json(&json!({"id": 42, "name": "Linus"})));
    let body = Employee::named("Linus");

    let employee = service.create(Some(body.clone())).await.unwrap();

    assert_eq!(employee, Employee::named("Linus").with_id(42));
    assert_eq!(gateway.calls(), vec![GatewayCall::Create(body)]);
}

#[tokio::test]
async fn test_create_failures() {
    let (service, gateway, _) = service_with(MockEmployeeGateway::ok_json(&json!({"id": 1})));
    assert_eq!(
        service.create(None).await.unwrap_err(),
        validation(messages::ENTER_EMPLOYEE_ID)
    );
    assert!(gateway.calls().is_empty());

    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::not_found()));
    assert_eq!(
        service.create(Some(Employee::named("Ada"))).await.unwrap_err(),
        DomainError::NotFound
    );

    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        422,
        "Unprocessable Entity",
        r#"[{"field":"email","message":"has already been taken"}]"#,
    )));
    assert!(matches!(
        service.create(Some(Employee::named("Ada"))).await.unwrap_err(),
        DomainError::Upstream { status: 422, .. }
    ));
}

#[tokio::test]
async fn test_export_hands_decoded_list_to_exporter() {
    let (service, gateway, exporter) = service_with(MockEmployeeGateway::ok_json(&staff()));

    let receipt = service.export().await.unwrap();

    assert_eq!(receipt.rows, 2);
    assert_eq!(exporter.exports(), vec![staff()]);
    assert_eq!(gateway.calls(), vec![GatewayCall::List]);
}

#[tokio::test]
async fn test_export_failures() {
    let (service, _, exporter) = service_with(MockEmployeeGateway::new(UpstreamResponse::ok("null")));
    assert_eq!(
        service.export().await.unwrap_err(),
        DomainError::decode(messages::ERROR_OCCURED)
    );
    assert!(exporter.exports().is_empty());

    let (service, _, _) = service_with(MockEmployeeGateway::new(UpstreamResponse::new(
        503,
        "Service Unavailable",
        "",
    )));
    assert!(matches!(
        service.export().await.unwrap_err(),
        DomainError::Upstream { status: 503, .. }
    ));

    let service = EmployeeService::new(
        Arc::new(MockEmployeeGateway::ok_json(&staff())),
        Arc::new(MockEmployeeExporter::new(true)),
        EmployeeServiceConfig::default(),
    );
    assert!(matches!(
        service.export().await.unwrap_err(),
        DomainError::Export { .. }
    ));
}
