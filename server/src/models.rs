use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// A persisted recipe row. The full document lives in `body`; the other
/// columns are denormalized for keying and listing.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoredRecipe {
    pub id: Uuid,
    pub body: serde_json::Value,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub id: Uuid,
    pub body: serde_json::Value,
    pub source: &'a str,
    pub created_at: DateTime<Utc>,
}
