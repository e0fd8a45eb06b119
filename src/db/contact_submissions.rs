use crate::db::Mongo;
use crate::models::ContactSubmission;

const COLLECTION: &str = "contact_submissions";

pub async fn insert(
    mongo: &Mongo,
    submission: &ContactSubmission,
) -> Result<(), mongodb::error::Error> {
    mongo
        .database()
        .collection::<ContactSubmission>(COLLECTION)
        .insert_one(submission, None)
        .await?;
    Ok(())
}
