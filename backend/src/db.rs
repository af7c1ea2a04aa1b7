use anyhow::Result;
use shared::{Bill, BillStatus};
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:bills.db";

/// DbConnection manages the bills table
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bills (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL,
                expense_type TEXT NOT NULL,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                status TEXT NOT NULL,
                file_url TEXT NOT NULL,
                file_name TEXT NOT NULL,
                commentary TEXT NOT NULL,
                vat TEXT NOT NULL,
                pct INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert a new bill row. Fails on duplicate id.
    pub async fn insert_bill(&self, bill: &Bill) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bills
                (id, email, expense_type, name, amount, date, status,
                 file_url, file_name, commentary, vat, pct)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&bill.id)
        .bind(&bill.email)
        .bind(&bill.expense_type)
        .bind(&bill.name)
        .bind(bill.amount)
        .bind(&bill.date)
        .bind(bill.status.as_code())
        .bind(&bill.file_url)
        .bind(&bill.file_name)
        .bind(&bill.commentary)
        .bind(&bill.vat)
        .bind(bill.pct as i64)
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    /// Retrieve a bill by its id
    pub async fn get_bill(&self, id: &str) -> Result<Option<Bill>> {
        let row = sqlx::query("SELECT * FROM bills WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| Self::row_to_bill(&r)))
    }

    /// List all bills, most recent date first
    pub async fn list_bills(&self) -> Result<Vec<Bill>> {
        let rows = sqlx::query("SELECT * FROM bills ORDER BY date DESC")
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.iter().map(Self::row_to_bill).collect())
    }

    /// Overwrite an existing bill row.
    /// Returns false when no row with that id exists.
    pub async fn update_bill(&self, bill: &Bill) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE bills SET
                email = ?, expense_type = ?, name = ?, amount = ?, date = ?,
                status = ?, file_url = ?, file_name = ?, commentary = ?,
                vat = ?, pct = ?
            WHERE id = ?
            "#,
        )
        .bind(&bill.email)
        .bind(&bill.expense_type)
        .bind(&bill.name)
        .bind(bill.amount)
        .bind(&bill.date)
        .bind(bill.status.as_code())
        .bind(&bill.file_url)
        .bind(&bill.file_name)
        .bind(&bill.commentary)
        .bind(&bill.vat)
        .bind(bill.pct as i64)
        .bind(&bill.id)
        .execute(&*self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    fn row_to_bill(row: &sqlx::sqlite::SqliteRow) -> Bill {
        let status: String = row.get("status");
        let pct: i64 = row.get("pct");
        Bill {
            id: row.get("id"),
            email: row.get("email"),
            expense_type: row.get("expense_type"),
            name: row.get("name"),
            amount: row.get("amount"),
            date: row.get("date"),
            status: BillStatus::from_code(&status),
            file_url: row.get("file_url"),
            file_name: row.get("file_name"),
            commentary: row.get("commentary"),
            vat: row.get("vat"),
            pct: pct as u32,
        }
    }
}
