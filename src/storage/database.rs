//! SQLite operations for habits, completions, and the garden shop.

use std::path::Path;

use chrono::{Local, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::config::NAME_MAX_LEN;
use crate::models::{CoinLedger, Completion, Difficulty, Frequency, GardenItem, Habit, Purchase};

use super::error::{StoreError, StoreResult};


/// Simple counts used by the stats summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counts {
    pub total_habits: i64,
    pub total_completions: i64,
}


/// Open a connection with foreign keys enabled.
fn open(db_path: &Path) -> StoreResult<Connection> {
    let conn = Connection::open(db_path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}


/// Initialize the database with required tables.
pub fn init_database(db_path: &Path) -> StoreResult<()> {
    // Create parent directory if needed
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = open(db_path)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS habits (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            difficulty  TEXT NOT NULL DEFAULT 'medium'
                        CHECK (difficulty IN ('easy', 'medium', 'hard')),
            frequency   TEXT NOT NULL DEFAULT 'daily'
                        CHECK (frequency IN ('daily', 'custom')),
            weekly_mask TEXT,
            created_at  TEXT NOT NULL,
            archived_at TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS completions (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id INTEGER NOT NULL,
            date     TEXT NOT NULL,
            UNIQUE(habit_id, date),
            FOREIGN KEY(habit_id) REFERENCES habits(id) ON DELETE CASCADE
        )",
        [],
    )?;

    // Index for faster date-based queries
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_completions_date ON completions(date)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            cost INTEGER NOT NULL CHECK (cost >= 0)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS purchases (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id          INTEGER NOT NULL,
            cost_at_purchase INTEGER NOT NULL CHECK (cost_at_purchase >= 0),
            purchased_at     TEXT NOT NULL,
            FOREIGN KEY(item_id) REFERENCES items(id) ON DELETE RESTRICT
        )",
        [],
    )?;

    Ok(())
}


/// Insert starter habits and the item catalog if the tables are empty.
///
/// Idempotent: safe to run multiple times.
pub fn seed_defaults(db_path: &Path) -> StoreResult<()> {
    let conn = open(db_path)?;

    let habit_count: i64 = conn.query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
    if habit_count == 0 {
        let starter = [
            ("Drink water", Difficulty::Easy),
            ("Walk 20 minutes", Difficulty::Medium),
            ("Read 10 pages", Difficulty::Medium),
        ];
        let created_at = Utc::now().to_rfc3339();
        for (name, difficulty) in starter {
            conn.execute(
                "INSERT INTO habits (name, difficulty, frequency, created_at)
                 VALUES (?1, ?2, 'daily', ?3)",
                params![name, difficulty.as_str(), created_at],
            )?;
        }
    }

    let item_count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    if item_count == 0 {
        let catalog = [("Bench", 10), ("Tree", 25), ("Pond", 50), ("Lantern", 15)];
        for (name, cost) in catalog {
            conn.execute(
                "INSERT INTO items (name, cost) VALUES (?1, ?2)",
                params![name, cost],
            )?;
        }
    }

    Ok(())
}


// ---------- Habits ----------


/// Trim and length-check a habit name.
fn validate_name(name: &str) -> StoreResult<&str> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > NAME_MAX_LEN {
        return Err(StoreError::InvalidName);
    }
    Ok(name)
}


/// Check a weekly mask for a custom-frequency habit.
fn validate_mask(mask: Option<&str>) -> StoreResult<&str> {
    match mask {
        Some(mask) if mask.len() == 7 && mask.bytes().all(|b| b == b'0' || b == b'1') => Ok(mask),
        _ => Err(StoreError::InvalidMask),
    }
}


fn habit_from_row(row: &Row) -> rusqlite::Result<Habit> {
    let difficulty: String = row.get(2)?;
    let frequency: String = row.get(3)?;
    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        // CHECK constraints keep these columns to known values
        difficulty: Difficulty::parse(&difficulty).unwrap_or_default(),
        frequency: Frequency::parse(&frequency).unwrap_or_default(),
        weekly_mask: row.get(4)?,
        created_at: row.get(5)?,
        archived_at: row.get(6)?,
    })
}


const HABIT_COLUMNS: &str = "id, name, difficulty, frequency, weekly_mask, created_at, archived_at";


/// Insert a new habit and return the stored row.
pub fn create_habit(
    db_path: &Path,
    name: &str,
    difficulty: Difficulty,
    frequency: Frequency,
    weekly_mask: Option<&str>,
) -> StoreResult<Habit> {
    let name = validate_name(name)?;
    let mask = match frequency {
        Frequency::Custom => Some(validate_mask(weekly_mask)?),
        Frequency::Daily => None,
    };

    let conn = open(db_path)?;
    conn.execute(
        "INSERT INTO habits (name, difficulty, frequency, weekly_mask, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            name,
            difficulty.as_str(),
            frequency.as_str(),
            mask,
            Utc::now().to_rfc3339(),
        ],
    )?;

    let id = conn.last_insert_rowid();
    let habit = conn.query_row(
        &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1"),
        params![id],
        habit_from_row,
    )?;
    Ok(habit)
}


/// List habits, newest first. Archived habits are excluded unless requested.
pub fn list_habits(db_path: &Path, include_archived: bool) -> StoreResult<Vec<Habit>> {
    let conn = open(db_path)?;

    let query = if include_archived {
        format!("SELECT {HABIT_COLUMNS} FROM habits ORDER BY id DESC")
    } else {
        format!("SELECT {HABIT_COLUMNS} FROM habits WHERE archived_at IS NULL ORDER BY id DESC")
    };

    let mut stmt = conn.prepare(&query)?;
    let habits = stmt
        .query_map([], habit_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(habits)
}


/// Get a single habit by id.
pub fn get_habit(db_path: &Path, id: i64) -> StoreResult<Habit> {
    let conn = open(db_path)?;
    get_habit_conn(&conn, id)
}


fn get_habit_conn(conn: &Connection, id: i64) -> StoreResult<Habit> {
    conn.query_row(
        &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1"),
        params![id],
        habit_from_row,
    )
    .optional()?
    .ok_or(StoreError::NotFound("habit"))
}


/// Rename and/or archive a habit. Returns the updated row.
///
/// Archiving stamps `archived_at` with today's date; unarchiving clears it.
pub fn update_habit(
    db_path: &Path,
    id: i64,
    name: Option<&str>,
    archived: Option<bool>,
) -> StoreResult<Habit> {
    let conn = open(db_path)?;

    // Fail with not-found before touching anything
    get_habit_conn(&conn, id)?;

    if let Some(name) = name {
        let name = validate_name(name)?;
        conn.execute(
            "UPDATE habits SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;
    }

    match archived {
        Some(true) => {
            let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
            conn.execute(
                "UPDATE habits SET archived_at = ?1 WHERE id = ?2",
                params![today, id],
            )?;
        }
        Some(false) => {
            conn.execute("UPDATE habits SET archived_at = NULL WHERE id = ?1", params![id])?;
        }
        None => {}
    }

    get_habit_conn(&conn, id)
}


// ---------- Completions ----------


/// Mark a habit complete for a date.
///
/// At most one completion exists per (habit, date); a second mark for the
/// same day is a `DuplicateCompletion` error.
pub fn mark_complete(db_path: &Path, habit_id: i64, date: NaiveDate) -> StoreResult<Completion> {
    let conn = open(db_path)?;

    // Distinguish a missing habit from a duplicate mark
    get_habit_conn(&conn, habit_id)?;

    let date = date.format("%Y-%m-%d").to_string();
    let result = conn.execute(
        "INSERT INTO completions (habit_id, date) VALUES (?1, ?2)",
        params![habit_id, date],
    );

    match result {
        Ok(_) => Ok(Completion { habit_id, date }),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(StoreError::DuplicateCompletion)
        }
        Err(e) => Err(e.into()),
    }
}


/// Remove a completion for a date. Missing records are a not-found error.
pub fn unmark_complete(db_path: &Path, habit_id: i64, date: NaiveDate) -> StoreResult<()> {
    let conn = open(db_path)?;
    let removed = conn.execute(
        "DELETE FROM completions WHERE habit_id = ?1 AND date = ?2",
        params![habit_id, date.format("%Y-%m-%d").to_string()],
    )?;

    if removed == 0 {
        return Err(StoreError::NotFound("completion"));
    }
    Ok(())
}


/// List completion dates for a habit between two dates, ascending.
pub fn completions_in_range(
    db_path: &Path,
    habit_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> StoreResult<Vec<String>> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare(
        "SELECT date FROM completions
         WHERE habit_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;

    let dates = stmt
        .query_map(
            params![
                habit_id,
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string(),
            ],
            |row| row.get(0),
        )?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(dates)
}


/// All completions across all habits, date ascending.
pub fn all_completions(db_path: &Path) -> StoreResult<Vec<Completion>> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare("SELECT habit_id, date FROM completions ORDER BY date ASC")?;

    let completions = stmt
        .query_map([], |row| {
            Ok(Completion {
                habit_id: row.get(0)?,
                date: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(completions)
}


/// Active-habit and completion counts for the stats summary.
pub fn counts(db_path: &Path) -> StoreResult<Counts> {
    let conn = open(db_path)?;

    let total_habits: i64 = conn.query_row(
        "SELECT COUNT(*) FROM habits WHERE archived_at IS NULL",
        [],
        |row| row.get(0),
    )?;
    let total_completions: i64 =
        conn.query_row("SELECT COUNT(*) FROM completions", [], |row| row.get(0))?;

    Ok(Counts {
        total_habits,
        total_completions,
    })
}


// ---------- Coins ----------


/// Coins earned: each completion is worth its habit's difficulty value.
fn earned_coins(conn: &Connection) -> StoreResult<i64> {
    let mut stmt = conn.prepare(
        "SELECT habits.difficulty, COUNT(*)
         FROM completions
         JOIN habits ON habits.id = completions.habit_id
         GROUP BY habits.difficulty",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut earned = 0;
    for row in rows {
        let (difficulty, count) = row?;
        let value = Difficulty::parse(&difficulty).unwrap_or_default().coin_value();
        earned += value * count;
    }
    Ok(earned)
}


fn spent_coins(conn: &Connection) -> StoreResult<i64> {
    let spent = conn.query_row(
        "SELECT COALESCE(SUM(cost_at_purchase), 0) FROM purchases",
        [],
        |row| row.get(0),
    )?;
    Ok(spent)
}


/// The full coin ledger: earned, spent, and the floored balance.
pub fn coin_ledger(db_path: &Path) -> StoreResult<CoinLedger> {
    let conn = open(db_path)?;
    Ok(CoinLedger::new(earned_coins(&conn)?, spent_coins(&conn)?))
}


// ---------- Garden shop ----------


/// The item catalog, cheapest first.
pub fn list_items(db_path: &Path) -> StoreResult<Vec<GardenItem>> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare("SELECT id, name, cost FROM items ORDER BY cost ASC, id ASC")?;

    let items = stmt
        .query_map([], |row| {
            Ok(GardenItem {
                id: row.get(0)?,
                name: row.get(1)?,
                cost: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(items)
}


/// Buy an item at its current cost.
///
/// Runs in a transaction: the balance check and the insert see the same
/// ledger, and a purchase never drives the balance below zero.
pub fn purchase_item(db_path: &Path, item_id: i64) -> StoreResult<Purchase> {
    let mut conn = open(db_path)?;
    let tx = conn.transaction()?;

    let item = tx
        .query_row(
            "SELECT id, name, cost FROM items WHERE id = ?1",
            params![item_id],
            |row| {
                Ok(GardenItem {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    cost: row.get(2)?,
                })
            },
        )
        .optional()?
        .ok_or(StoreError::NotFound("item"))?;

    let ledger = CoinLedger::new(earned_coins(&tx)?, spent_coins(&tx)?);
    if ledger.balance < item.cost {
        return Err(StoreError::InsufficientCoins {
            balance: ledger.balance,
            cost: item.cost,
        });
    }

    let purchased_at = Utc::now().to_rfc3339();
    tx.execute(
        "INSERT INTO purchases (item_id, cost_at_purchase, purchased_at) VALUES (?1, ?2, ?3)",
        params![item.id, item.cost, purchased_at],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Purchase {
        id,
        item_id: item.id,
        item_name: item.name,
        cost_at_purchase: item.cost,
        purchased_at,
    })
}


/// Purchase history, newest first.
pub fn list_purchases(db_path: &Path) -> StoreResult<Vec<Purchase>> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare(
        "SELECT p.id, p.item_id, i.name, p.cost_at_purchase, p.purchased_at
         FROM purchases p
         JOIN items i ON i.id = p.item_id
         ORDER BY p.id DESC",
    )?;

    let purchases = stmt
        .query_map([], |row| {
            Ok(Purchase {
                id: row.get(0)?,
                item_id: row.get(1)?,
                item_name: row.get(2)?,
                cost_at_purchase: row.get(3)?,
                purchased_at: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(purchases)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_db() -> (TempDir, PathBuf) {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("test.db");
        init_database(&db_path).unwrap();
        (tmp_dir, db_path)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_init_database() {
        let (_tmp, db_path) = test_db();
        assert!(db_path.exists());
    }

    #[test]
    fn test_create_and_list() {
        let (_tmp, db_path) = test_db();

        let habit = create_habit(&db_path, "  Stretch  ", Difficulty::Easy, Frequency::Daily, None)
            .unwrap();
        assert_eq!(habit.name, "Stretch");
        assert!(habit.is_active());

        let habits = list_habits(&db_path, false).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, habit.id);
    }

    #[test]
    fn test_name_validation() {
        let (_tmp, db_path) = test_db();

        let err = create_habit(&db_path, "   ", Difficulty::Medium, Frequency::Daily, None);
        assert!(matches!(err, Err(StoreError::InvalidName)));

        let long = "x".repeat(81);
        let err = create_habit(&db_path, &long, Difficulty::Medium, Frequency::Daily, None);
        assert!(matches!(err, Err(StoreError::InvalidName)));
    }

    #[test]
    fn test_custom_frequency_requires_mask() {
        let (_tmp, db_path) = test_db();

        let err = create_habit(&db_path, "Gym", Difficulty::Hard, Frequency::Custom, None);
        assert!(matches!(err, Err(StoreError::InvalidMask)));

        let err = create_habit(&db_path, "Gym", Difficulty::Hard, Frequency::Custom, Some("12x"));
        assert!(matches!(err, Err(StoreError::InvalidMask)));

        let habit =
            create_habit(&db_path, "Gym", Difficulty::Hard, Frequency::Custom, Some("1010100"))
                .unwrap();
        assert_eq!(habit.weekly_mask.as_deref(), Some("1010100"));
    }

    #[test]
    fn test_archive_hides_from_listing() {
        let (_tmp, db_path) = test_db();

        let habit =
            create_habit(&db_path, "Stretch", Difficulty::Medium, Frequency::Daily, None).unwrap();
        let updated = update_habit(&db_path, habit.id, None, Some(true)).unwrap();
        assert!(!updated.is_active());

        assert!(list_habits(&db_path, false).unwrap().is_empty());
        assert_eq!(list_habits(&db_path, true).unwrap().len(), 1);

        let restored = update_habit(&db_path, habit.id, None, Some(false)).unwrap();
        assert!(restored.is_active());
    }

    #[test]
    fn test_update_missing_habit() {
        let (_tmp, db_path) = test_db();
        let err = update_habit(&db_path, 99, Some("New"), None);
        assert!(matches!(err, Err(StoreError::NotFound("habit"))));
    }

    #[test]
    fn test_duplicate_completion() {
        let (_tmp, db_path) = test_db();
        let habit =
            create_habit(&db_path, "Stretch", Difficulty::Medium, Frequency::Daily, None).unwrap();

        let d = date(2026, 8, 24);
        mark_complete(&db_path, habit.id, d).unwrap();
        let err = mark_complete(&db_path, habit.id, d);
        assert!(matches!(err, Err(StoreError::DuplicateCompletion)));
    }

    #[test]
    fn test_complete_missing_habit() {
        let (_tmp, db_path) = test_db();
        let err = mark_complete(&db_path, 99, date(2026, 8, 24));
        assert!(matches!(err, Err(StoreError::NotFound("habit"))));
    }

    #[test]
    fn test_unmark() {
        let (_tmp, db_path) = test_db();
        let habit =
            create_habit(&db_path, "Stretch", Difficulty::Medium, Frequency::Daily, None).unwrap();

        let d = date(2026, 8, 24);
        mark_complete(&db_path, habit.id, d).unwrap();
        unmark_complete(&db_path, habit.id, d).unwrap();

        let err = unmark_complete(&db_path, habit.id, d);
        assert!(matches!(err, Err(StoreError::NotFound("completion"))));
    }

    #[test]
    fn test_completions_in_range() {
        let (_tmp, db_path) = test_db();
        let habit =
            create_habit(&db_path, "Stretch", Difficulty::Medium, Frequency::Daily, None).unwrap();

        mark_complete(&db_path, habit.id, date(2026, 8, 20)).unwrap();
        mark_complete(&db_path, habit.id, date(2026, 8, 22)).unwrap();
        mark_complete(&db_path, habit.id, date(2026, 8, 24)).unwrap();

        let dates =
            completions_in_range(&db_path, habit.id, date(2026, 8, 21), date(2026, 8, 24)).unwrap();
        assert_eq!(dates, vec!["2026-08-22", "2026-08-24"]);
    }

    #[test]
    fn test_coin_ledger_weights_by_difficulty() {
        let (_tmp, db_path) = test_db();
        let easy =
            create_habit(&db_path, "Water", Difficulty::Easy, Frequency::Daily, None).unwrap();
        let hard = create_habit(&db_path, "Run", Difficulty::Hard, Frequency::Daily, None).unwrap();

        mark_complete(&db_path, easy.id, date(2026, 8, 23)).unwrap();
        mark_complete(&db_path, easy.id, date(2026, 8, 24)).unwrap();
        mark_complete(&db_path, hard.id, date(2026, 8, 24)).unwrap();

        let ledger = coin_ledger(&db_path).unwrap();
        assert_eq!(ledger.earned, 50 + 50 + 200);
        assert_eq!(ledger.spent, 0);
        assert_eq!(ledger.balance, 300);
    }

    #[test]
    fn test_purchase_checks_balance() {
        let (_tmp, db_path) = test_db();
        seed_defaults(&db_path).unwrap();

        let items = list_items(&db_path).unwrap();
        let bench = items.iter().find(|i| i.name == "Bench").unwrap();

        // No completions yet, so no coins
        let err = purchase_item(&db_path, bench.id);
        assert!(matches!(err, Err(StoreError::InsufficientCoins { .. })));

        let habits = list_habits(&db_path, false).unwrap();
        mark_complete(&db_path, habits[0].id, date(2026, 8, 24)).unwrap();

        let purchase = purchase_item(&db_path, bench.id).unwrap();
        assert_eq!(purchase.item_name, "Bench");
        assert_eq!(purchase.cost_at_purchase, bench.cost);

        let ledger = coin_ledger(&db_path).unwrap();
        assert_eq!(ledger.spent, bench.cost);

        let purchases = list_purchases(&db_path).unwrap();
        assert_eq!(purchases.len(), 1);
    }

    #[test]
    fn test_purchase_missing_item() {
        let (_tmp, db_path) = test_db();
        let err = purchase_item(&db_path, 99);
        assert!(matches!(err, Err(StoreError::NotFound("item"))));
    }

    #[test]
    fn test_seed_idempotent() {
        let (_tmp, db_path) = test_db();
        seed_defaults(&db_path).unwrap();
        seed_defaults(&db_path).unwrap();

        assert_eq!(list_habits(&db_path, false).unwrap().len(), 3);
        assert_eq!(list_items(&db_path).unwrap().len(), 4);
    }
}
