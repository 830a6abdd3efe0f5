use std::sync::Arc;

use crate::{config::MailConfig, mailer::Mailer, order_log::OrderLog};

#[derive(Clone)]
pub struct AppState {
    pub mail: Arc<MailConfig>,
    pub mailer: Arc<dyn Mailer>,
    pub order_log: OrderLog,
}

impl AppState {
    pub fn new(mail: MailConfig, mailer: Arc<dyn Mailer>, order_log: OrderLog) -> Self {
        Self {
            mail: Arc::new(mail),
            mailer,
            order_log,
        }
    }
}
