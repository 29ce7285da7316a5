use projmark_core::db::migrations::latest_version;
use projmark_core::db::open_db_in_memory;
use projmark_core::{
    Project, ProjectRepository, ProjectService, RepoError, SqliteProjectRepository,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip_keeps_inputs_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let id = repo.create_project("demo", "\"/tmp/x\"").unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded, Project::new(id, "demo", "\"/tmp/x\""));
}

#[test]
fn empty_name_and_path_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let id = repo.create_project("", "").unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.name, "");
    assert_eq!(loaded.path, "");
}

#[test]
fn get_missing_project_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    assert!(repo.get_project(42).unwrap().is_none());
}

#[test]
fn list_is_empty_then_follows_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    assert!(repo.list_projects().unwrap().is_empty());

    let inputs = [("alpha", "/a"), ("beta", "/b"), ("alpha", "/c")];
    let ids: Vec<_> = inputs
        .iter()
        .map(|(name, path)| repo.create_project(name, path).unwrap())
        .collect();

    let listed = repo.list_projects().unwrap();
    assert_eq!(listed.len(), inputs.len());
    for ((project, (name, path)), id) in listed.iter().zip(inputs).zip(ids) {
        assert_eq!(project.id, id);
        assert_eq!(project.name, name);
        assert_eq!(project.path, path);
    }
}

#[test]
fn delete_reports_affected_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let id = repo.create_project("demo", "/tmp/x").unwrap();

    assert_eq!(repo.delete_project(id + 100).unwrap(), 0);
    assert_eq!(repo.list_projects().unwrap().len(), 1);

    assert_eq!(repo.delete_project(id).unwrap(), 1);
    assert!(repo.get_project(id).unwrap().is_none());
    assert_eq!(repo.delete_project(id).unwrap(), 0);
}

#[test]
fn ids_increase_and_are_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let mut highest = 0;
    for round in 0..5 {
        let id = repo.create_project("p", "/p").unwrap();
        assert!(id > highest, "round {round}: id {id} not above {highest}");
        highest = id;
        // Deleting the newest row must not free its id.
        repo.delete_project(id).unwrap();
    }

    let next = repo.create_project("p", "/p").unwrap();
    assert!(next > highest);
}

#[test]
fn service_fetch_maps_missing_row_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let err = service.fetch_project(9).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9)));
}

#[test]
fn service_scenario_create_list_delete_open() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    assert_eq!(service.create_project("demo", "/tmp/x").unwrap(), 1);
    assert_eq!(service.create_project("demo2", "/tmp/y").unwrap(), 2);

    let names: Vec<_> = service
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(names, ["demo", "demo2"]);

    assert_eq!(service.delete_project(1).unwrap(), 1);
    let remaining = service.list_projects().unwrap();
    assert_eq!(remaining, [Project::new(2, "demo2", "/tmp/y")]);

    assert!(matches!(
        service.fetch_project(1),
        Err(RepoError::NotFound(1))
    ));
}

#[test]
fn write_failure_surfaces_as_db_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    conn.execute_batch("PRAGMA query_only = ON;").unwrap();

    let err = repo.create_project("demo", "/tmp/x").unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn project_serializes_with_plain_field_names() {
    let project = Project::new(3, "demo", "/tmp/x");

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": 3, "name": "demo", "path": "/tmp/x" })
    );
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteProjectRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_project_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteProjectRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("project"))
    ));
}

#[test]
fn scan_keeps_unreadable_rows_in_place_while_list_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    repo.create_project("first", "/a").unwrap();
    conn.execute(
        "INSERT INTO project (name, path) VALUES (X'00FF', '/b');",
        [],
    )
    .unwrap();
    repo.create_project("last", "/c").unwrap();

    let rows = repo.scan_projects().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].as_ref().unwrap(), &Project::new(1, "first", "/a"));
    assert!(matches!(rows[1], Err(RepoError::Db(_))));
    assert_eq!(rows[2].as_ref().unwrap(), &Project::new(3, "last", "/c"));

    assert!(matches!(repo.list_projects(), Err(RepoError::Db(_))));
}
