//! Application Context
//!
//! Notice channel shared via the Leptos Context API. Validation failures and
//! storage failures both end up here; neither interrupts the action that
//! caused them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{PersistError, ValidationError};

/// How long a notice stays up before it dismisses itself
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// A message for the user about the last action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation(ValidationError),
    Persist(PersistError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Validation(e) => e.to_string(),
            Notice::Persist(e) if e.is_corrupt() => {
                format!("Saved habits could not be read and were reset. {}", e)
            }
            Notice::Persist(e) => format!("Your changes are kept but were not saved. {}", e),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Validation(_) => "notice notice-warning",
            Notice::Persist(_) => "notice notice-error",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Notice currently shown - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice currently shown - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show a notice and dismiss it after a timeout unless replaced
    pub fn report(&self, notice: Notice) {
        let set_notice = self.set_notice;
        let shown = notice.clone();
        set_notice.set(Some(notice));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notice.update(|current| {
                if current.as_ref() == Some(&shown) {
                    *current = None;
                }
            });
        });
    }

    /// Report the storage outcome of a mutation, if it failed
    pub fn report_persist(&self, persisted: Result<(), PersistError>) {
        if let Err(e) = persisted {
            self.report(Notice::Persist(e));
        }
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
