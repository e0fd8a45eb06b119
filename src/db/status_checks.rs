use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

use crate::db::Mongo;
use crate::models::StatusCheck;

const COLLECTION: &str = "status_checks";

pub async fn insert(mongo: &Mongo, check: &StatusCheck) -> Result<(), mongodb::error::Error> {
    mongo
        .database()
        .collection::<StatusCheck>(COLLECTION)
        .insert_one(check, None)
        .await?;
    Ok(())
}

/// Returns up to `limit` records in insertion order. Stored timestamps are
/// ISO-8601 strings and deserialize back into `DateTime<Utc>`.
pub async fn list(mongo: &Mongo, limit: i64) -> Result<Vec<StatusCheck>, mongodb::error::Error> {
    let options = FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .limit(limit)
        .build();

    let mut cursor = mongo
        .database()
        .collection::<StatusCheck>(COLLECTION)
        .find(doc! {}, options)
        .await?;

    let mut checks = Vec::new();
    while let Some(check) = cursor.try_next().await? {
        checks.push(check);
    }
    Ok(checks)
}
