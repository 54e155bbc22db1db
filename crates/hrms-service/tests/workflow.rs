//! Integration tests for the resource services and integrity rules
//!
//! Runs against a real SQLite in-memory database with migrations applied

use hrms_service::{
    entities::{department, employee, job, user},
    validator, DepartmentChanges, DepartmentService, EmployeeChanges, EmployeeService,
    EmployeeStatus, JobChanges, JobService, NewDepartment, NewEmployee, NewJob, NewUser,
    ServiceError, Session, UserChanges, UserService,
};
use sea_orm::DatabaseConnection;

/// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    let db = hrms_db::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    hrms_db::migrate(&db).await.expect("Failed to run migrations");

    db
}

async fn create_department(db: &DatabaseConnection, name: &str) -> department::Model {
    DepartmentService::create(
        db,
        NewDepartment {
            name: name.to_string(),
            leader_id: None,
        },
    )
    .await
    .expect("Failed to create department")
}

async fn create_job(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
    department_id: i32,
    is_leadership: bool,
) -> job::Model {
    JobService::create(
        db,
        NewJob {
            name: name.to_string(),
            code: code.to_string(),
            department_id,
            is_leadership,
        },
    )
    .await
    .expect("Failed to create job")
}

fn new_employee(register_number: &str, job_id: i32) -> NewEmployee {
    NewEmployee {
        name: "Maria".to_string(),
        last_name: "Silva".to_string(),
        register_number: register_number.to_string(),
        job_id,
        salary: 4500.0,
        status: None,
        department_id: None,
    }
}

async fn create_employee(
    db: &DatabaseConnection,
    register_number: &str,
    job_id: i32,
) -> employee::Model {
    EmployeeService::create(db, new_employee(register_number, job_id))
        .await
        .expect("Failed to create employee")
}

// ============================================================
// Department derivation
// ============================================================

#[tokio::test]
async fn test_end_to_end_department_from_job() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "1001", rep.id).await;

    assert_eq!(staff.department_id, sales.id);
    assert_eq!(staff.status, EmployeeStatus::Active);
}

#[tokio::test]
async fn test_supplied_department_is_discarded() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let finance = create_department(&db, "Finance").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;

    let mut input = new_employee("1002", rep.id);
    input.department_id = Some(finance.id);
    let staff = EmployeeService::create(&db, input).await.unwrap();

    assert_eq!(staff.department_id, sales.id);
}

#[tokio::test]
async fn test_resolve_department_for_unknown_job() {
    let db = setup_test_db().await;

    let result = validator::resolve_department_for_job(&db, 42).await;
    assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
}

#[tokio::test]
async fn test_create_employee_with_unknown_job() {
    let db = setup_test_db().await;

    let result = EmployeeService::create(&db, new_employee("1003", 999)).await;
    assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
    assert!(EmployeeService::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_promotion_rederives_department() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let finance = create_department(&db, "Finance").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let analyst = create_job(&db, "Analyst", "ANL", finance.id, false).await;
    let staff = create_employee(&db, "1004", rep.id).await;

    let promoted = EmployeeService::promote(
        &db,
        staff.id,
        EmployeeChanges {
            job_id: Some(analyst.id),
            salary: Some(8000.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(promoted.job_id, analyst.id);
    assert_eq!(promoted.department_id, finance.id);
    assert_eq!(promoted.salary, 8000.0);
}

#[tokio::test]
async fn test_job_department_change_moves_employees() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let finance = create_department(&db, "Finance").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let first = create_employee(&db, "1005", rep.id).await;
    let second = create_employee(&db, "1006", rep.id).await;

    JobService::update(
        &db,
        rep.id,
        JobChanges {
            department_id: Some(finance.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    for id in [first.id, second.id] {
        let staff = EmployeeService::get_by_id(&db, id).await.unwrap();
        assert_eq!(staff.department_id, finance.id);
    }
}

// ============================================================
// Promotion workflow
// ============================================================

#[tokio::test]
async fn test_promotion_into_occupied_leadership_job_fails() {
    let db = setup_test_db().await;

    let it = create_department(&db, "IT").await;
    let hr = create_department(&db, "HR").await;
    let dev = create_job(&db, "Developer", "DEV", it.id, false).await;
    let lead = create_job(&db, "Tech Lead", "LEAD", hr.id, true).await;

    let leader = create_employee(&db, "2001", lead.id).await;
    let candidate = create_employee(&db, "2002", dev.id).await;

    let result = EmployeeService::promote(
        &db,
        candidate.id,
        EmployeeChanges {
            job_id: Some(lead.id),
            salary: Some(12000.0),
            ..Default::default()
        },
    )
    .await;

    match result {
        Err(ServiceError::PromotionConflict { job_id, holder_id }) => {
            assert_eq!(job_id, lead.id);
            assert_eq!(holder_id, leader.id);
        }
        other => panic!("Expected PromotionConflict, got {:?}", other),
    }

    let unchanged = EmployeeService::get_by_id(&db, candidate.id).await.unwrap();
    assert_eq!(unchanged.job_id, dev.id);
    assert_eq!(unchanged.department_id, it.id);
    assert_eq!(unchanged.salary, candidate.salary);
}

#[tokio::test]
async fn test_archived_holder_frees_leadership_job() {
    let db = setup_test_db().await;

    let it = create_department(&db, "IT").await;
    let dev = create_job(&db, "Developer", "DEV", it.id, false).await;
    let lead = create_job(&db, "Tech Lead", "LEAD", it.id, true).await;

    let leader = create_employee(&db, "2003", lead.id).await;
    let candidate = create_employee(&db, "2004", dev.id).await;

    EmployeeService::archive(&db, leader.id).await.unwrap();

    let promoted = EmployeeService::promote(
        &db,
        candidate.id,
        EmployeeChanges {
            job_id: Some(lead.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(promoted.job_id, lead.id);
}

#[tokio::test]
async fn test_create_into_occupied_leadership_job_fails() {
    let db = setup_test_db().await;

    let it = create_department(&db, "IT").await;
    let lead = create_job(&db, "Tech Lead", "LEAD", it.id, true).await;
    create_employee(&db, "2005", lead.id).await;

    let result = EmployeeService::create(&db, new_employee("2006", lead.id)).await;
    assert!(matches!(result, Err(ServiceError::PromotionConflict { .. })));
}

#[tokio::test]
async fn test_salary_only_promotion_keeps_job() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "3001", rep.id).await;

    let promoted = EmployeeService::promote(
        &db,
        staff.id,
        EmployeeChanges {
            salary: Some(9000.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(promoted.salary, 9000.0);
    assert_eq!(promoted.job_id, rep.id);
    assert_eq!(promoted.department_id, sales.id);
    assert_eq!(promoted.name, staff.name);
}

#[tokio::test]
async fn test_promotion_to_unknown_job_is_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "3002", rep.id).await;

    let result = EmployeeService::promote(
        &db,
        staff.id,
        EmployeeChanges {
            job_id: Some(404),
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
    let unchanged = EmployeeService::get_by_id(&db, staff.id).await.unwrap();
    assert_eq!(unchanged.name, "Maria");
}

#[tokio::test]
async fn test_archive_is_idempotent() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "3003", rep.id).await;

    let first = EmployeeService::archive(&db, staff.id).await.unwrap();
    let second = EmployeeService::archive(&db, staff.id).await.unwrap();

    assert_eq!(first.status, EmployeeStatus::Archived);
    assert_eq!(second.status, EmployeeStatus::Archived);
    assert_eq!(second.job_id, rep.id);
    assert_eq!(second.department_id, sales.id);
}

#[tokio::test]
async fn test_status_filter() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let kept = create_employee(&db, "3004", rep.id).await;
    let gone = create_employee(&db, "3005", rep.id).await;
    EmployeeService::archive(&db, gone.id).await.unwrap();

    let active = EmployeeService::get_all_with_status(&db, EmployeeStatus::Active)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, kept.id);

    assert_eq!(EmployeeService::get_all(&db).await.unwrap().len(), 2);
}

// ============================================================
// Resource services
// ============================================================

#[tokio::test]
async fn test_duplicate_department_name_rejected() {
    let db = setup_test_db().await;

    create_department(&db, "Sales").await;
    let result = DepartmentService::create(
        &db,
        NewDepartment {
            name: "Sales".to_string(),
            leader_id: None,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_duplicate_job_code_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    create_job(&db, "Rep", "REP", sales.id, false).await;

    let result = JobService::create(
        &db,
        NewJob {
            name: "Representative".to_string(),
            code: "REP".to_string(),
            department_id: sales.id,
            is_leadership: false,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_duplicate_job_name_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    create_job(&db, "Rep", "REP", sales.id, false).await;

    let result = JobService::create(
        &db,
        NewJob {
            name: "Rep".to_string(),
            code: "RP2".to_string(),
            department_id: sales.id,
            is_leadership: false,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert_eq!(JobService::get_all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_register_number_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    create_employee(&db, "1001", rep.id).await;

    let result = EmployeeService::create(&db, new_employee("1001", rep.id)).await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert_eq!(EmployeeService::get_all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_promotion_with_blank_name_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "1001", rep.id).await;

    let result = EmployeeService::promote(
        &db,
        staff.id,
        EmployeeChanges {
            name: Some(String::new()),
            salary: Some(9000.0),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));

    let unchanged = EmployeeService::get_by_id(&db, staff.id).await.unwrap();
    assert_eq!(unchanged.name, "Maria");
    assert_eq!(unchanged.salary, 4500.0);
}

#[tokio::test]
async fn test_job_code_too_long_rejected() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let result = JobService::create(
        &db,
        NewJob {
            name: "Rep".to_string(),
            code: "REPRE".to_string(),
            department_id: sales.id,
            is_leadership: false,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_job_with_unknown_department_rejected() {
    let db = setup_test_db().await;

    let result = JobService::create(
        &db,
        NewJob {
            name: "Rep".to_string(),
            code: "REP".to_string(),
            department_id: 77,
            is_leadership: false,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
}

#[tokio::test]
async fn test_leadership_flag_requires_single_holder() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    create_employee(&db, "4001", rep.id).await;
    create_employee(&db, "4002", rep.id).await;

    let result = JobService::update(
        &db,
        rep.id,
        JobChanges {
            is_leadership: Some(true),
            ..Default::default()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_duplicate_user_login_rejected() {
    let db = setup_test_db().await;

    let new_user = || NewUser {
        login: "admin".to_string(),
        passw: "admin".to_string(),
        employee_id: None,
    };

    UserService::create(&db, new_user()).await.unwrap();
    let result = UserService::create(&db, new_user()).await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;

    let updated = JobService::update(
        &db,
        rep.id,
        JobChanges {
            name: Some("Sales Representative".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Sales Representative");
    assert_eq!(updated.code, "REP");
    assert_eq!(updated.department_id, sales.id);
    assert!(!updated.is_leadership);
}

#[tokio::test]
async fn test_department_leader_can_be_cleared() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "4003", rep.id).await;

    let led = DepartmentService::update(
        &db,
        sales.id,
        DepartmentChanges {
            leader_id: Some(Some(staff.id)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(led.leader_id, Some(staff.id));

    let cleared = DepartmentService::update(
        &db,
        sales.id,
        DepartmentChanges {
            leader_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(cleared.leader_id, None);
    assert_eq!(cleared.name, "Sales");
}

#[tokio::test]
async fn test_change_password_only_touches_password() {
    let db = setup_test_db().await;

    let created = UserService::create(
        &db,
        NewUser {
            login: "joana".to_string(),
            passw: "first".to_string(),
            employee_id: None,
        },
    )
    .await
    .unwrap();

    let changed = UserService::change_password(&db, created.id, "second".to_string())
        .await
        .unwrap();

    assert_eq!(changed.passw, "second");
    assert_eq!(changed.login, "joana");

    let renamed = UserService::update(
        &db,
        created.id,
        UserChanges {
            login: Some("joana.p".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(renamed.passw, "second");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "5001", rep.id).await;

    EmployeeService::delete(&db, staff.id).await.unwrap();
    JobService::delete(&db, rep.id).await.unwrap();
    DepartmentService::delete(&db, sales.id).await.unwrap();

    assert!(matches!(
        EmployeeService::get_by_id(&db, staff.id).await,
        Err(ServiceError::NotFound { entity: "Employee", .. })
    ));
    assert!(matches!(
        JobService::get_by_id(&db, rep.id).await,
        Err(ServiceError::NotFound { entity: "Job", .. })
    ));
    assert!(matches!(
        DepartmentService::get_by_id(&db, sales.id).await,
        Err(ServiceError::NotFound { entity: "Department", .. })
    ));
}

#[tokio::test]
async fn test_deleting_employee_releases_references() {
    let db = setup_test_db().await;

    let sales = create_department(&db, "Sales").await;
    let rep = create_job(&db, "Rep", "REP", sales.id, false).await;
    let staff = create_employee(&db, "5002", rep.id).await;

    DepartmentService::update(
        &db,
        sales.id,
        DepartmentChanges {
            leader_id: Some(Some(staff.id)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let account = UserService::create(
        &db,
        NewUser {
            login: "maria".to_string(),
            passw: "secret".to_string(),
            employee_id: Some(staff.id),
        },
    )
    .await
    .unwrap();

    EmployeeService::delete(&db, staff.id).await.unwrap();

    let sales = DepartmentService::get_by_id(&db, sales.id).await.unwrap();
    let account: user::Model = UserService::get_by_id(&db, account.id).await.unwrap();
    assert_eq!(sales.leader_id, None);
    assert_eq!(account.employee_id, None);
}

#[tokio::test]
async fn test_user_linked_to_unknown_employee_rejected() {
    let db = setup_test_db().await;

    let result = UserService::create(
        &db,
        NewUser {
            login: "ghost".to_string(),
            passw: "secret".to_string(),
            employee_id: Some(12),
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::InvalidReference(_))));
}

// ============================================================
// Session scope
// ============================================================

#[tokio::test]
async fn test_dropped_session_rolls_back() {
    let db = setup_test_db().await;

    {
        let session = Session::begin(&db).await.unwrap();
        DepartmentService::create(
            session.conn(),
            NewDepartment {
                name: "Temporary".to_string(),
                leader_id: None,
            },
        )
        .await
        .unwrap();
        // dropped without commit
    }

    assert!(DepartmentService::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_committed_session_persists() {
    let db = setup_test_db().await;

    let session = Session::begin(&db).await.unwrap();
    let created = DepartmentService::create(
        session.conn(),
        NewDepartment {
            name: "Permanent".to_string(),
            leader_id: None,
        },
    )
    .await
    .unwrap();
    session.commit().await.unwrap();

    let found = DepartmentService::get_by_id(&db, created.id).await.unwrap();
    assert_eq!(found.name, "Permanent");
}

#[tokio::test]
async fn test_explicit_rollback_discards_writes() {
    let db = setup_test_db().await;

    let session = Session::begin(&db).await.unwrap();
    DepartmentService::create(
        session.conn(),
        NewDepartment {
            name: "Discarded".to_string(),
            leader_id: None,
        },
    )
    .await
    .unwrap();
    session.rollback().await.unwrap();

    assert!(DepartmentService::get_all(&db).await.unwrap().is_empty());
}
