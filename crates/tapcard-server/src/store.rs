//! SQLite-backed profile store.
//!
//! All card data lives in a single `profiles` table. The connection is
//! shared behind `Arc<Mutex<_>>`; every operation takes the lock for one
//! statement, so handlers never hold it across an await point.
//!
//! Uniqueness of slugs and edit tokens is enforced by the schema, and
//! constraint violations are mapped to typed errors so callers can tell
//! "address taken" apart from a real database failure. Counter bumps are
//! single `UPDATE ... SET c = c + 1` statements and therefore atomic even
//! with concurrent viewers.

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tapcard_core::{NewProfile, Profile, ProfileUpdate, new_profile_id};

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors from the profile store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slug is already claimed by another card.
    #[error("slug already taken: {0}")]
    SlugTaken(String),

    /// The edit token is already in use by another card.
    #[error("edit token already in use")]
    TokenTaken,

    /// The profile id does not exist.
    #[error("no such profile: {0}")]
    Missing(String),

    /// Underlying SQLite error.
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// A stored JSON column failed to parse.
    #[error("corrupt stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS profiles (
    id            TEXT PRIMARY KEY,
    slug          TEXT NOT NULL UNIQUE,
    edit_token    TEXT NOT NULL UNIQUE,
    full_name     TEXT NOT NULL,
    job_title     TEXT NOT NULL,
    company       TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL,
    bio           TEXT NOT NULL DEFAULT '',
    website       TEXT,
    profile_image TEXT,
    social_links  TEXT NOT NULL DEFAULT '{}',
    custom_theme  TEXT NOT NULL DEFAULT '{}',
    visits        INTEGER NOT NULL DEFAULT 0,
    qr_code_scans INTEGER NOT NULL DEFAULT 0,
    created_at    INTEGER NOT NULL
);
";

const COLUMNS: &str = "id, slug, edit_token, full_name, job_title, company, email, phone, \
                       bio, website, profile_image, social_links, custom_theme, \
                       visits, qr_code_scans, created_at";

/// Handle to the profiles database, cheap to clone into request handlers.
#[derive(Clone)]
pub struct ProfileStore {
    conn: Arc<Mutex<Connection>>,
}

impl ProfileStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::bootstrap(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Looks up a profile by its public slug.
    pub fn get_by_slug(&self, slug: &str) -> StoreResult<Option<Profile>> {
        self.get_by("slug", slug)
    }

    /// Looks up a profile by its edit token. Possession of the token is the
    /// entire authorization model, so this is also the edit-page auth check.
    pub fn get_by_edit_token(&self, token: &str) -> StoreResult<Option<Profile>> {
        self.get_by("edit_token", token)
    }

    fn get_by(&self, column: &str, value: &str) -> StoreResult<Option<Profile>> {
        let conn = self.conn.lock();
        let raw = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM profiles WHERE {column} = ?1"),
                params![value],
                read_row,
            )
            .optional()?;
        drop(conn);
        raw.map(RawRow::into_profile).transpose()
    }

    /// Inserts a new profile with zeroed counters and returns its id.
    ///
    /// The caller is expected to have validated the payload; this only adds
    /// what the schema enforces (slug and token uniqueness).
    pub fn create(&self, new: &NewProfile) -> StoreResult<String> {
        let id = new_profile_id();
        let created_at = chrono::Utc::now().timestamp();
        let social_links = serde_json::to_string(&new.social_links)?;
        let custom_theme = serde_json::to_string(&new.custom_theme)?;

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO profiles (id, slug, edit_token, full_name, job_title, company, \
             email, phone, bio, website, profile_image, social_links, custom_theme, \
             visits, qr_code_scans, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, 0, 0, ?14)",
            params![
                id,
                new.slug,
                new.edit_token,
                new.full_name,
                new.job_title,
                new.company,
                new.email,
                new.phone,
                new.bio,
                new.website,
                new.profile_image,
                social_links,
                custom_theme,
                created_at,
            ],
        )
        .map_err(|e| map_constraint(e, &new.slug))?;
        Ok(id)
    }

    /// Replaces all mutable fields of the profile with the given id.
    ///
    /// Slug, edit token, counters, and the creation timestamp are never
    /// touched by updates.
    pub fn update(&self, id: &str, update: &ProfileUpdate) -> StoreResult<()> {
        let social_links = serde_json::to_string(&update.social_links)?;
        let custom_theme = serde_json::to_string(&update.custom_theme)?;

        let conn = self.conn.lock();
        let affected = conn.execute(
            "UPDATE profiles SET full_name = ?1, job_title = ?2, company = ?3, email = ?4, \
             phone = ?5, bio = ?6, website = ?7, profile_image = ?8, social_links = ?9, \
             custom_theme = ?10 WHERE id = ?11",
            params![
                update.full_name,
                update.job_title,
                update.company,
                update.email,
                update.phone,
                update.bio,
                update.website,
                update.profile_image,
                social_links,
                custom_theme,
                id,
            ],
        )?;
        if affected == 0 {
            return Err(StoreError::Missing(id.to_string()));
        }
        Ok(())
    }

    /// Bumps the visit counter. Atomic read-modify-write in SQL, so
    /// concurrent page loads never lose increments.
    pub fn increment_visits(&self, id: &str) -> StoreResult<()> {
        self.increment("visits", id)
    }

    /// Bumps the QR-tap counter.
    pub fn increment_qr_scans(&self, id: &str) -> StoreResult<()> {
        self.increment("qr_code_scans", id)
    }

    fn increment(&self, column: &str, id: &str) -> StoreResult<()> {
        let conn = self.conn.lock();
        let affected = conn.execute(
            &format!("UPDATE profiles SET {column} = {column} + 1 WHERE id = ?1"),
            params![id],
        )?;
        if affected == 0 {
            return Err(StoreError::Missing(id.to_string()));
        }
        Ok(())
    }
}

/// Row image with the JSON columns still unparsed; rusqlite's row mapper
/// can only fail with its own error type, so JSON parsing happens after.
struct RawRow {
    profile: Profile,
    social_links: String,
    custom_theme: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        profile: Profile {
            id: row.get(0)?,
            slug: row.get(1)?,
            edit_token: row.get(2)?,
            full_name: row.get(3)?,
            job_title: row.get(4)?,
            company: row.get(5)?,
            email: row.get(6)?,
            phone: row.get(7)?,
            bio: row.get(8)?,
            website: row.get(9)?,
            profile_image: row.get(10)?,
            social_links: Default::default(),
            custom_theme: Default::default(),
            visits: row.get(13)?,
            qr_code_scans: row.get(14)?,
            created_at: row.get(15)?,
        },
        social_links: row.get(11)?,
        custom_theme: row.get(12)?,
    })
}

impl RawRow {
    fn into_profile(self) -> StoreResult<Profile> {
        let mut profile = self.profile;
        profile.social_links = serde_json::from_str(&self.social_links)?;
        profile.custom_theme = serde_json::from_str(&self.custom_theme)?;
        Ok(profile)
    }
}

fn map_constraint(err: rusqlite::Error, slug: &str) -> StoreError {
    if let rusqlite::Error::SqliteFailure(e, Some(msg)) = &err
        && e.code == rusqlite::ErrorCode::ConstraintViolation
    {
        if msg.contains("profiles.slug") {
            return StoreError::SlugTaken(slug.to_string());
        }
        if msg.contains("profiles.edit_token") {
            return StoreError::TokenTaken;
        }
    }
    StoreError::Db(err)
}
