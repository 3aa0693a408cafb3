use crate::errors::AppResult;
use rusqlite::Connection;

/// `employee_id` is declared as a reference but `foreign_keys` stays off,
/// so orphaned events are accepted.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        name          TEXT NOT NULL,
        badge_number  TEXT NOT NULL,
        role          TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS clock_events (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id  INTEGER,
        kind         TEXT CHECK(kind IN ('entrance', 'exit')),
        timestamp    TEXT,
        FOREIGN KEY (employee_id) REFERENCES employees(id)
    );
"#;

/// Create both tables if they are missing. Safe to call on every startup.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [name],
                |row| row.get(0),
            )
            .unwrap();
        count > 0
    }

    #[test]
    fn creates_both_tables() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, "employees"));

        init_db(&conn).unwrap();

        assert!(table_exists(&conn, "employees"));
        assert!(table_exists(&conn, "clock_events"));
    }

    #[test]
    fn init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute(
            "INSERT INTO employees (name, badge_number, role) VALUES ('Ana', '123', 'Clerk')",
            [],
        )
        .unwrap();

        init_db(&conn).unwrap();

        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM employees", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn storage_rejects_unknown_kind() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        let res = conn.execute(
            "INSERT INTO clock_events (employee_id, kind, timestamp) VALUES (1, 'lunch', '2025-01-01 12:00:00')",
            [],
        );
        assert!(res.is_err());
    }
}
