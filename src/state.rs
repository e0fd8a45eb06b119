use std::sync::Arc;

use crate::config::Config;
use crate::db::Mongo;
use crate::email::Mailer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub mongo: Mongo,
    pub config: Config,
    pub mailer: Option<Arc<Mailer>>,
}
