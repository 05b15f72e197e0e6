use sqlx::SqlitePool;

/// A cafe row. Serialized to the API as a flat ten-field mapping.
#[derive(Debug, Clone, PartialEq, serde::Serialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Insert payload; flag coercion happens in the service layer
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

// AUTOINCREMENT keeps deleted ids from being reused.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cafes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    map_url TEXT NOT NULL,
    img_url TEXT NOT NULL,
    location TEXT NOT NULL,
    seats TEXT NOT NULL,
    has_toilet INTEGER NOT NULL,
    has_wifi INTEGER NOT NULL,
    has_sockets INTEGER NOT NULL,
    can_take_calls INTEGER NOT NULL,
    coffee_price TEXT
)";

/// Create the cafes table if it does not exist yet (idempotent)
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

pub async fn insert(pool: &SqlitePool, cafe: &NewCafe) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO cafes (name, map_url, img_url, location, seats,
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&cafe.name)
    .bind(&cafe.map_url)
    .bind(&cafe.img_url)
    .bind(&cafe.location)
    .bind(&cafe.seats)
    .bind(cafe.has_toilet)
    .bind(cafe.has_wifi)
    .bind(cafe.has_sockets)
    .bind(cafe.can_take_calls)
    .bind(&cafe.coffee_price)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM cafes ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Exact, case-sensitive match on `location`
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> Result<Vec<Cafe>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM cafes WHERE location = ? ORDER BY id")
        .bind(location)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Cafe>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM cafes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite `coffee_price`; returns false when no row has that id
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Permanently remove a row; returns false when no row has that id
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cafes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
