//! Submission workflow for a listing draft.
//!
//! A submit runs validate → upload each screenshot in order → insert the
//! row. Nothing is sent when validation fails, the insert is only attempted
//! once every upload succeeded, and objects uploaded during a failed attempt
//! are removed again so storage never keeps screenshots for a row that does
//! not exist.
//!
//! [`SubmitGuard`] holds the authoritative [`SubmitPhase`]. A submit is only
//! accepted from `Idle`, `Succeeded` or `Failed`, so a second click while a
//! submission is in flight is rejected instead of inserting a second row.

use crate::error::EditorError;
use crate::listing_data::{Attachment, ListingDraft};
use crate::operations::{build_record, validate_required};
use crate::persistence::{storage_key, PersistenceService};

/// Which button started the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIntent {
    SaveDraft,
    Publish,
}

impl SubmitIntent {
    pub fn from_publish(publish: bool) -> SubmitIntent {
        if publish {
            SubmitIntent::Publish
        } else {
            SubmitIntent::SaveDraft
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            SubmitIntent::Publish => "Domain listing published!",
            SubmitIntent::SaveDraft => "Draft saved successfully!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Uploading { done: usize, total: usize },
    Inserting,
    Succeeded(SubmitIntent),
    Failed(String),
}

impl SubmitPhase {
    pub fn accepts_submit(&self) -> bool {
        matches!(
            self,
            SubmitPhase::Idle | SubmitPhase::Succeeded(_) | SubmitPhase::Failed(_)
        )
    }

    pub fn is_busy(&self) -> bool {
        !self.accepts_submit()
    }

    /// Upload progress in percent, if uploading
    pub fn upload_progress(&self) -> Option<u8> {
        match self {
            SubmitPhase::Uploading { done, total } if *total > 0 => {
                Some(((done * 100) / total).min(100) as u8)
            }
            _ => None,
        }
    }
}

/// Owner of the current phase; the single place a submit can start from
#[derive(Debug, Default)]
pub struct SubmitGuard {
    phase: SubmitPhase,
}

impl SubmitGuard {
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Move to `Validating` if no submission is running
    pub fn try_begin(&mut self) -> Result<(), EditorError> {
        if self.phase.accepts_submit() {
            self.phase = SubmitPhase::Validating;
            Ok(())
        } else {
            Err(EditorError::Busy)
        }
    }

    pub fn advance(&mut self, phase: SubmitPhase) {
        log::debug!("Submit phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub intent: SubmitIntent,
    pub screenshot_urls: Vec<String>,
}

/// Validate, upload and insert one draft
///
/// `on_phase` sees every transition, ending in `Succeeded` or `Failed`.
/// The draft itself is never modified; resetting it on success is left to
/// the caller.
pub async fn submit_listing<S, F>(
    service: &S,
    draft: &ListingDraft,
    intent: SubmitIntent,
    has_attachments: bool,
    mut on_phase: F,
) -> Result<SubmitReceipt, EditorError>
where
    S: PersistenceService + ?Sized,
    F: FnMut(SubmitPhase),
{
    on_phase(SubmitPhase::Validating);
    let result = run(service, draft, intent, has_attachments, &mut on_phase).await;

    match &result {
        Ok(receipt) => {
            log::info!("Listing {} saved ({:?})", draft.domain, receipt.intent);
            on_phase(SubmitPhase::Succeeded(intent));
        }
        Err(e @ EditorError::Validation { .. }) => {
            log::warn!("Submit rejected: {}", e);
            on_phase(SubmitPhase::Failed(e.user_message()));
        }
        Err(e) => {
            log::error!("Error saving domain listing: {}", e);
            on_phase(SubmitPhase::Failed(e.user_message()));
        }
    }
    result
}

async fn run<S, F>(
    service: &S,
    draft: &ListingDraft,
    intent: SubmitIntent,
    has_attachments: bool,
    on_phase: &mut F,
) -> Result<SubmitReceipt, EditorError>
where
    S: PersistenceService + ?Sized,
    F: FnMut(SubmitPhase),
{
    validate_required(draft)?;

    let screenshots: &[Attachment] = if has_attachments {
        draft.screenshots.as_slice()
    } else {
        &[]
    };
    let total = screenshots.len();
    let mut uploaded_keys = Vec::with_capacity(total);
    let mut urls = Vec::with_capacity(total);

    for (done, attachment) in screenshots.iter().enumerate() {
        on_phase(SubmitPhase::Uploading { done, total });
        let key = storage_key(&attachment.file_name);

        match service.upload(&key, attachment).await {
            Ok(url) => {
                uploaded_keys.push(key);
                urls.push(url);
            }
            Err(source) => {
                discard_uploads(service, &uploaded_keys).await;
                return Err(EditorError::Upload {
                    file_name: attachment.file_name.clone(),
                    source,
                });
            }
        }
    }
    if total > 0 {
        on_phase(SubmitPhase::Uploading { done: total, total });
    }

    on_phase(SubmitPhase::Inserting);
    let record = build_record(draft, urls.clone(), has_attachments);
    if let Err(e) = service.insert(&record).await {
        discard_uploads(service, &uploaded_keys).await;
        return Err(EditorError::Insert(e));
    }

    Ok(SubmitReceipt {
        intent,
        screenshot_urls: urls,
    })
}

async fn discard_uploads<S>(service: &S, keys: &[String])
where
    S: PersistenceService + ?Sized,
{
    if keys.is_empty() {
        return;
    }

    match service.remove(keys).await {
        Ok(()) => log::info!("Removed {} orphaned screenshot(s)", keys.len()),
        Err(e) => log::error!("Failed to remove orphaned screenshots {:?}: {}", keys, e),
    }
}
