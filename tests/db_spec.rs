use betterct::config::DatabaseLocation;
use betterct::db::Database;
use betterct::models::*;
use speculate2::speculate;
use uuid::Uuid;

fn input(title: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: None,
        status: TaskStatus::Backlog,
    }
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "migrations" {
        it "records the applied versions" {
            let applied = db.applied_migrations().expect("Query failed");
            assert_eq!(applied, vec!["001".to_string()]);
        }

        it "is idempotent" {
            db.migrate().expect("Second migration run failed");
            assert_eq!(db.applied_migrations().expect("Query failed").len(), 1);
        }
    }

    describe "tasks" {
        describe "create_task" {
            it "stores the task in the given workspace" {
                let task = db.create_task("org_1", "user_1", input("Write copy")).expect("Failed to create");

                assert_eq!(task.title, "Write copy");
                assert_eq!(task.org_id, "org_1");
                assert_eq!(task.created_by, "user_1");
                assert_eq!(task.status, TaskStatus::Backlog);
                assert_eq!(task.created_at, task.updated_at);
            }

            it "keeps an explicit status" {
                let task = db.create_task("org_1", "user_1", CreateTaskInput {
                    title: "Review hero".to_string(),
                    description: Some("Check contrast".to_string()),
                    status: TaskStatus::InReview,
                }).expect("Failed to create");

                let found = db.get_task("org_1", task.id).expect("Query failed").expect("Task missing");
                assert_eq!(found.status, TaskStatus::InReview);
                assert_eq!(found.description, Some("Check contrast".to_string()));
            }
        }

        describe "get_task" {
            it "returns None for a non-existent task" {
                assert!(db.get_task("org_1", Uuid::new_v4()).expect("Query failed").is_none());
            }

            it "returns None for a task of another workspace" {
                let task = db.create_task("org_1", "user_1", input("Scoped")).expect("Failed to create");
                assert!(db.get_task("org_2", task.id).expect("Query failed").is_none());
            }
        }

        describe "list_tasks" {
            it "lists only the workspace's tasks in creation order" {
                db.create_task("org_1", "user_1", input("a")).unwrap();
                db.create_task("org_2", "user_2", input("other")).unwrap();
                db.create_task("org_1", "user_1", input("b")).unwrap();

                let titles: Vec<String> = db
                    .list_tasks("org_1", None)
                    .expect("Query failed")
                    .into_iter()
                    .map(|t| t.title)
                    .collect();
                assert_eq!(titles, vec!["a".to_string(), "b".to_string()]);
            }

            it "filters by status" {
                let moved = db.create_task("org_1", "user_1", input("moved")).unwrap();
                db.create_task("org_1", "user_1", input("left")).unwrap();
                db.set_task_status("org_1", moved.id, TaskStatus::Done).unwrap();

                let done = db.list_tasks("org_1", Some(TaskStatus::Done)).expect("Query failed");
                assert_eq!(done.len(), 1);
                assert_eq!(done[0].id, moved.id);
            }
        }

        describe "update_task" {
            it "updates the given fields only" {
                let task = db.create_task("org_1", "user_1", input("Before")).unwrap();

                let updated = db.update_task("org_1", task.id, UpdateTaskInput {
                    title: Some("After".to_string()),
                    ..Default::default()
                }).expect("Update failed").expect("Task missing");

                assert_eq!(updated.title, "After");
                assert_eq!(updated.status, TaskStatus::Backlog);
                assert!(updated.updated_at >= task.updated_at);

                let stored = db.get_task("org_1", task.id).unwrap().unwrap();
                assert_eq!(stored.title, "After");
            }

            it "clears the description on an explicit null" {
                let task = db.create_task("org_1", "user_1", CreateTaskInput {
                    title: "Notes".to_string(),
                    description: Some("Draft".to_string()),
                    status: TaskStatus::Backlog,
                }).unwrap();

                let updated = db.update_task("org_1", task.id, UpdateTaskInput {
                    description: Some(None),
                    ..Default::default()
                }).expect("Update failed").expect("Task missing");

                assert_eq!(updated.description, None);
                assert_eq!(db.get_task("org_1", task.id).unwrap().unwrap().description, None);
            }

            it "returns None for a deleted task" {
                let task = db.create_task("org_1", "user_1", input("Removed")).unwrap();
                db.delete_task("org_1", task.id).unwrap();

                let result = db.update_task("org_1", task.id, UpdateTaskInput {
                    title: Some("Revived".to_string()),
                    ..Default::default()
                }).expect("Update failed");
                assert!(result.is_none());
                assert!(db.list_tasks("org_1", None).unwrap().is_empty());
            }

            it "does not touch tasks of another workspace" {
                let task = db.create_task("org_1", "user_1", input("Mine")).unwrap();

                let result = db.set_task_status("org_2", task.id, TaskStatus::Done).expect("Update failed");
                assert!(result.is_none());

                let stored = db.get_task("org_1", task.id).unwrap().unwrap();
                assert_eq!(stored.status, TaskStatus::Backlog);
            }
        }

        describe "delete_task" {
            it "removes the task" {
                let task = db.create_task("org_1", "user_1", input("Gone")).unwrap();

                assert!(db.delete_task("org_1", task.id).expect("Delete failed"));
                assert!(db.get_task("org_1", task.id).unwrap().is_none());
            }

            it "reports false for a task of another workspace" {
                let task = db.create_task("org_1", "user_1", input("Kept")).unwrap();

                assert!(!db.delete_task("org_2", task.id).expect("Delete failed"));
                assert!(db.get_task("org_1", task.id).unwrap().is_some());
            }
        }
    }

    describe "on-disk databases" {
        it "persist tasks across reopen" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let location = DatabaseLocation::File(dir.path().join("nested").join("betterct.db"));

            let first = Database::open_location(&location).expect("Failed to open");
            first.migrate().unwrap();
            let task = first.create_task("org_1", "user_1", input("Durable")).unwrap();
            drop(first);

            let second = Database::open_location(&location).expect("Failed to reopen");
            second.migrate().unwrap();
            let found = second.get_task("org_1", task.id).unwrap().expect("Task missing");
            assert_eq!(found.title, "Durable");
        }
    }
}
