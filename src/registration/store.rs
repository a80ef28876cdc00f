use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::form::{RegistrationForm, SubmissionState, SubmitError};
use super::notice::Notice;

/// Forms untouched for this long are dropped on the next access.
const IDLE_TTL_SECS: u64 = 1800; // 30 minutes

struct Entry {
    form: RegistrationForm,
    notice: Option<Notice>,
    touched: Instant,
}

impl Entry {
    fn fresh() -> Self {
        Self { form: RegistrationForm::new(), notice: None, touched: Instant::now() }
    }
}

/// In-process home of every visitor's form, keyed by visit id.
#[derive(Clone)]
pub struct FormStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    idle_ttl: Duration,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::with_idle_ttl(Duration::from_secs(IDLE_TTL_SECS))
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Run `f` against the visit's form, creating a fresh one if needed.
    /// `f` also gets the pending notice slot.
    pub fn with_form<R>(
        &self,
        visit_id: &str,
        f: impl FnOnce(&mut RegistrationForm, &mut Option<Notice>) -> R,
    ) -> R {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        self.purge_idle(&mut map);
        let entry = map.entry(visit_id.to_string()).or_insert_with(Entry::fresh);
        entry.touched = Instant::now();
        f(&mut entry.form, &mut entry.notice)
    }

    /// Clone of the visit's form plus its pending notice, which is consumed.
    pub fn snapshot(&self, visit_id: &str) -> (RegistrationForm, Option<Notice>) {
        self.with_form(visit_id, |form, notice| (form.clone(), notice.take()))
    }

    /// Current form without consuming the pending notice.
    pub fn peek(&self, visit_id: &str) -> RegistrationForm {
        self.with_form(visit_id, |form, _| form.clone())
    }

    pub fn submit(&self, visit_id: &str) -> Result<(), SubmitError> {
        self.with_form(visit_id, |form, _| form.submit())
    }

    /// Finish a pending submission. Returns false when the visit is gone or
    /// was not submitting.
    pub fn complete(&self, visit_id: &str) -> bool {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let Some(entry) = map.get_mut(visit_id) else {
            return false;
        };
        match entry.form.complete_submission() {
            Some(notice) => {
                entry.notice = Some(notice);
                entry.touched = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Forget the visit's form. The next access starts from scratch.
    pub fn discard(&self, visit_id: &str) {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(visit_id);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A submitting form is kept so its completion task still finds it.
    fn purge_idle(&self, map: &mut HashMap<String, Entry>) {
        let now = Instant::now();
        map.retain(|_, entry| {
            entry.form.state() == SubmissionState::Submitting
                || now.duration_since(entry.touched) < self.idle_ttl
        });
    }
}

/// Spawn the simulated submission: after `delay` the visit's form moves to
/// `Succeeded`. Not cancellable.
pub fn schedule_completion(store: FormStore, visit_id: String, delay: Duration) {
    log::info!("Registration submitted, completing in {}ms", delay.as_millis());
    actix_web::rt::spawn(async move {
        tokio::time::sleep(delay).await;
        if store.complete(&visit_id) {
            log::info!("Registration completed");
        } else {
            log::warn!("Registration completion found no submitting form");
        }
    });
}
