use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockEvent, ClockRecord, Employee, EventKind, NewEmployee, RecordOrder};
use crate::utils::time::now_timestamp;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

// ---------------------------
// Employees
// ---------------------------

pub fn create_employee(conn: &Connection, emp: &NewEmployee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, badge_number, role) VALUES (?1, ?2, ?3)",
        params![emp.name, emp.badge_number, emp.role],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT id, name, badge_number, role FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete an employee and its clock events.
///
/// Events go first, then the employee row, both inside one transaction.
/// Returns the number of clock events removed.
pub fn delete_employee(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let removed = pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM clock_events WHERE employee_id = ?1", [id])?;
        tx.execute("DELETE FROM employees WHERE id = ?1", [id])?;
        tx.commit()?;
        Ok(removed)
    })?;
    Ok(removed)
}

fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        badge_number: row.get("badge_number")?,
        role: row.get("role")?,
    })
}

// ---------------------------
// Clock events
// ---------------------------

/// Validate `kind` and insert an event stamped with the local clock.
///
/// An unknown kind fails before storage is touched.
pub fn record_clock_event(conn: &Connection, employee_id: i64, kind: &str) -> AppResult<()> {
    let kind: EventKind = kind.parse()?;
    insert_clock_event_at(conn, employee_id, kind, &now_timestamp())
}

/// Insert an event with an explicit timestamp. The employee id is not checked.
pub fn insert_clock_event_at(
    conn: &Connection,
    employee_id: i64,
    kind: EventKind,
    timestamp: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clock_events (employee_id, kind, timestamp) VALUES (?1, ?2, ?3)",
        params![employee_id, kind.to_db_str(), timestamp],
    )?;
    Ok(())
}

/// Raw event rows in insertion order.
pub fn list_clock_events(conn: &Connection) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee_id, kind, timestamp FROM clock_events ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ClockEvent {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            kind: map_kind(row, "kind")?,
            timestamp: row.get("timestamp")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Clock events joined with the owning employee's name.
/// Events whose employee no longer exists are left out.
pub fn list_clock_events_joined(
    conn: &Connection,
    order: RecordOrder,
) -> AppResult<Vec<ClockRecord>> {
    let sql = format!(
        "SELECT e.name AS employee_name, c.kind AS kind, c.timestamp AS timestamp
         FROM clock_events c
         JOIN employees e ON c.employee_id = e.id
         {}",
        order.to_sql()
    );

    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([], |row| {
        Ok(ClockRecord {
            employee_name: row.get("employee_name")?,
            kind: map_kind(row, "kind")?,
            timestamp: row.get("timestamp")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete every clock event. Employees are untouched.
pub fn clear_all_clock_events(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM clock_events", [])?;
    Ok(n)
}

fn map_kind(row: &Row, col: &str) -> Result<EventKind> {
    let kind_str: String = row.get(col)?;
    EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::utils::time::parse_timestamp;

    fn setup() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn new_employee(name: &str, badge: &str, role: &str) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            badge_number: badge.into(),
            role: role.into(),
        }
    }

    #[test]
    fn create_then_list_employee() {
        let pool = setup();
        let id = create_employee(&pool.conn, &new_employee("Ana", "123", "Clerk")).unwrap();

        let list = list_employees(&pool.conn).unwrap();
        assert_eq!(
            list,
            vec![Employee {
                id,
                name: "Ana".into(),
                badge_number: "123".into(),
                role: "Clerk".into(),
            }]
        );
    }

    #[test]
    fn employees_listed_in_insertion_order_and_badges_may_repeat() {
        let pool = setup();
        let a = create_employee(&pool.conn, &new_employee("Ana", "7", "Clerk")).unwrap();
        let b = create_employee(&pool.conn, &new_employee("Ana", "7", "Clerk")).unwrap();
        assert!(b > a);

        let ids: Vec<i64> = list_employees(&pool.conn)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn invalid_kind_inserts_nothing() {
        let pool = setup();
        let id = create_employee(&pool.conn, &new_employee("Ana", "123", "Clerk")).unwrap();

        let err = record_clock_event(&pool.conn, id, "lunch").unwrap_err();
        assert!(matches!(err, AppError::InvalidEventKind(_)));
        assert!(list_clock_events(&pool.conn).unwrap().is_empty());
    }

    #[test]
    fn record_uses_timestamp_format() {
        let pool = setup();
        let id = create_employee(&pool.conn, &new_employee("Ana", "123", "Clerk")).unwrap();

        record_clock_event(&pool.conn, id, "entrance").unwrap();

        let events = list_clock_events(&pool.conn).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].employee_id, id);
        assert_eq!(events[0].kind, EventKind::Entrance);
        assert!(parse_timestamp(&events[0].timestamp).is_some());
    }

    #[test]
    fn joined_listing_orders() {
        let pool = setup();
        let id = create_employee(&pool.conn, &new_employee("Ana", "123", "Clerk")).unwrap();
        insert_clock_event_at(&pool.conn, id, EventKind::Exit, "2025-03-01 17:00:00").unwrap();
        insert_clock_event_at(&pool.conn, id, EventKind::Entrance, "2025-03-01 09:00:00")
            .unwrap();

        let newest = list_clock_events_joined(&pool.conn, RecordOrder::NewestFirst).unwrap();
        let stamps: Vec<&str> = newest.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(stamps, vec!["2025-03-01 17:00:00", "2025-03-01 09:00:00"]);
        assert_eq!(newest[0].employee_name, "Ana");
        assert_eq!(newest[0].kind, EventKind::Exit);

        let oldest = list_clock_events_joined(&pool.conn, RecordOrder::OldestFirst).unwrap();
        let stamps: Vec<&str> = oldest.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(stamps, vec!["2025-03-01 09:00:00", "2025-03-01 17:00:00"]);
    }

    #[test]
    fn orphaned_events_are_stored_but_not_joined() {
        let pool = setup();
        record_clock_event(&pool.conn, 42, "exit").unwrap();

        assert_eq!(list_clock_events(&pool.conn).unwrap().len(), 1);
        assert!(
            list_clock_events_joined(&pool.conn, RecordOrder::NewestFirst)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn delete_employee_removes_its_events_only() {
        let mut pool = setup();
        let ana = create_employee(&pool.conn, &new_employee("Ana", "1", "Clerk")).unwrap();
        let bob = create_employee(&pool.conn, &new_employee("Bob", "2", "Guard")).unwrap();
        insert_clock_event_at(&pool.conn, ana, EventKind::Entrance, "2025-03-01 09:00:00")
            .unwrap();
        insert_clock_event_at(&pool.conn, ana, EventKind::Exit, "2025-03-01 17:00:00").unwrap();
        insert_clock_event_at(&pool.conn, bob, EventKind::Entrance, "2025-03-01 08:00:00")
            .unwrap();

        let removed = delete_employee(&mut pool, ana).unwrap();
        assert_eq!(removed, 2);

        let employees = list_employees(&pool.conn).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Bob");

        let records = list_clock_events_joined(&pool.conn, RecordOrder::OldestFirst).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.employee_name == "Bob"));
        assert!(list_clock_events(&pool.conn)
            .unwrap()
            .iter()
            .all(|e| e.employee_id == bob));
    }

    #[test]
    fn delete_unknown_employee_is_noop() {
        let mut pool = setup();
        create_employee(&pool.conn, &new_employee("Ana", "1", "Clerk")).unwrap();

        assert_eq!(delete_employee(&mut pool, 999).unwrap(), 0);
        assert_eq!(list_employees(&pool.conn).unwrap().len(), 1);
    }

    #[test]
    fn clear_keeps_employees() {
        let pool = setup();
        let id = create_employee(&pool.conn, &new_employee("Ana", "1", "Clerk")).unwrap();
        record_clock_event(&pool.conn, id, "entrance").unwrap();
        record_clock_event(&pool.conn, id, "exit").unwrap();

        assert_eq!(clear_all_clock_events(&pool.conn).unwrap(), 2);
        assert!(list_clock_events(&pool.conn).unwrap().is_empty());
        assert_eq!(list_employees(&pool.conn).unwrap().len(), 1);
    }
}
