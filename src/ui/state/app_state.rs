use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::copy_service::CopyFeedback;
use crate::usecase::services::session::LookupSession;

pub struct AppState {
    pub session: Signal<Option<LookupSession>>,
    pub load_failed: Signal<bool>,
    pub copy_feedback: Signal<CopyFeedback>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| None::<LookupSession>),
            load_failed: use_signal(|| false),
            copy_feedback: use_signal(CopyFeedback::default),
        }
    }
}
