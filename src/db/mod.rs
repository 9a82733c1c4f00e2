mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, Row};
use uuid::Uuid;

use crate::config::DatabaseLocation;
use crate::models::*;

const TASK_COLUMNS: &str =
    "id, title, description, status, org_id, created_by, created_at, updated_at";

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "betterct")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("betterct.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_location(location: &DatabaseLocation) -> Result<Self> {
        match location {
            DatabaseLocation::Default => Self::open_default(),
            DatabaseLocation::Memory => Self::open_memory(),
            DatabaseLocation::File(path) => Self::open(path.clone()),
        }
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    pub fn applied_migrations(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::get_applied_migrations(&conn)
    }

    // ============================================================
    // Task operations
    // ============================================================

    /// Tasks in `org_id`, oldest first, optionally limited to one column.
    pub fn list_tasks(&self, org_id: &str, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let conn = self.conn.lock().expect("database lock poisoned");

        let tasks = match status {
            Some(status) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks
                     WHERE org_id = ? AND status = ? ORDER BY created_at, rowid"
                ))?;
                let rows = stmt.query_map((org_id, status.as_str()), row_to_task)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks
                     WHERE org_id = ? ORDER BY created_at, rowid"
                ))?;
                let rows = stmt.query_map([org_id], row_to_task)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(tasks)
    }

    pub fn get_task(&self, org_id: &str, id: Uuid) -> Result<Option<Task>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        find_task(&conn, org_id, id)
    }

    pub fn create_task(&self, org_id: &str, created_by: &str, input: CreateTaskInput) -> Result<Task> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO tasks (id, title, description, status, org_id, created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                &input.title,
                &input.description,
                input.status.as_str(),
                org_id,
                created_by,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;

        Ok(Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            org_id: org_id.to_string(),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. The read and the write happen under one lock,
    /// so a concurrent delete either wins entirely or not at all.
    pub fn update_task(&self, org_id: &str, id: Uuid, input: UpdateTaskInput) -> Result<Option<Task>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let Some(existing) = find_task(&conn, org_id, id)? else {
            return Ok(None);
        };

        let now = Utc::now();
        let title = input.title.unwrap_or(existing.title);
        let description = match input.description {
            Some(description) => description,
            None => existing.description,
        };
        let status = input.status.unwrap_or(existing.status);

        let rows = conn.execute(
            "UPDATE tasks SET title = ?, description = ?, status = ?, updated_at = ?
             WHERE id = ? AND org_id = ?",
            (
                &title,
                &description,
                status.as_str(),
                now.to_rfc3339(),
                id.to_string(),
                org_id,
            ),
        )?;
        if rows == 0 {
            return Ok(None);
        }

        Ok(Some(Task {
            title,
            description,
            status,
            updated_at: now,
            ..existing
        }))
    }

    pub fn set_task_status(&self, org_id: &str, id: Uuid, status: TaskStatus) -> Result<Option<Task>> {
        self.update_task(
            org_id,
            id,
            UpdateTaskInput {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn delete_task(&self, org_id: &str, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "DELETE FROM tasks WHERE id = ? AND org_id = ?",
            (id.to_string(), org_id),
        )?;
        Ok(rows > 0)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn find_task(conn: &Connection, org_id: &str, id: Uuid) -> Result<Option<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ? AND org_id = ?"
    ))?;

    let mut rows = stmt.query((id.to_string(), org_id))?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_task(row)?))
    } else {
        Ok(None)
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: parse_uuid(row.get::<_, String>(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        status: TaskStatus::from_str(&row.get::<_, String>(3)?).unwrap_or_default(),
        org_id: row.get(4)?,
        created_by: row.get(5)?,
        created_at: parse_datetime(row.get::<_, String>(6)?),
        updated_at: parse_datetime(row.get::<_, String>(7)?),
    })
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
