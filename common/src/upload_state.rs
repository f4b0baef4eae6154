//! State of the admin upload form.

use serde::{Deserialize, Serialize};

use crate::{advisory::AdvisoryKind, api_error::ApiError, upload::{UploadReceipt, UploadTarget}};

pub const NO_FILE_ADVISORY: &str = "Por favor, selecciona un archivo para subir.";
pub const UPLOAD_FAILED_ADVISORY: &str = "Error al subir el archivo. Por favor, inténtalo de nuevo.";
pub const UPLOAD_SUCCEEDED_ADVISORY: &str = "El archivo se ha subido correctamente.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    /// Submit was pressed with nothing selected.
    NoFile,
    Uploading,
    Succeeded(UploadReceipt),
    Failed(ApiError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadFormState {
    selected: Option<UploadTarget>,
    preview: Option<String>,
    phase: UploadPhase,
    /// Ticket of the most recent file pick; older reads are dropped.
    selection_ticket: u64,
}

impl UploadFormState {
    pub fn selected(&self) -> Option<&UploadTarget> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading)
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    /// Replaces the selection and clears the previous outcome. Ignored while uploading.
    pub fn select(&mut self, target: Option<UploadTarget>) {
        if self.is_uploading() {
            return;
        }
        self.preview = target.as_ref().and_then(UploadTarget::preview_data_url);
        self.selected = target;
        self.phase = UploadPhase::Idle;
    }

    /// Called when the user picks a file, before its bytes are read.
    pub fn start_selection(&mut self) -> u64 {
        self.selection_ticket += 1;
        self.selection_ticket
    }

    /// Applies a finished read unless a newer pick superseded it.
    pub fn complete_selection(&mut self, ticket: u64, target: Option<UploadTarget>) -> bool {
        if ticket != self.selection_ticket {
            return false;
        }
        self.select(target);
        true
    }

    /// Starts a submission and hands out the file to send.
    ///
    /// Without a selection this fails with `Validation` and the form shows the
    /// "no file" advisory; nothing may be dispatched in that case.
    pub fn begin(&mut self) -> Result<UploadTarget, ApiError> {
        if self.is_uploading() {
            return Err(ApiError::Validation("an upload is already in progress".to_string()));
        }
        let Some(target) = self.selected.clone() else {
            self.phase = UploadPhase::NoFile;
            return Err(ApiError::Validation("no file selected".to_string()));
        };
        self.phase = UploadPhase::Uploading;
        Ok(target)
    }

    /// Success clears the file and its preview; failure keeps them for a retry.
    pub fn finish(&mut self, outcome: Result<UploadReceipt, ApiError>) {
        match outcome {
            Ok(receipt) => {
                self.selected = None;
                self.preview = None;
                self.phase = UploadPhase::Succeeded(receipt);
            }
            Err(err) => {
                self.phase = UploadPhase::Failed(err);
            }
        }
    }

    pub fn advisory(&self) -> Option<(AdvisoryKind, &'static str)> {
        match &self.phase {
            UploadPhase::Succeeded(_) => Some((AdvisoryKind::Success, UPLOAD_SUCCEEDED_ADVISORY)),
            UploadPhase::NoFile => Some((AdvisoryKind::Error, NO_FILE_ADVISORY)),
            UploadPhase::Failed(_) => Some((AdvisoryKind::Error, UPLOAD_FAILED_ADVISORY)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> UploadTarget {
        UploadTarget::new("carta.png", Some("image/png".to_string()), vec![7, 7, 7])
    }

    fn receipt() -> UploadReceipt {
        UploadReceipt { stored_name: "uuid_carta.png".to_string(), url: "https://blob/uuid_carta.png".to_string() }
    }

    #[test]
    fn submit_without_file_is_rejected_before_dispatch() {
        let mut form = UploadFormState::default();
        assert!(!form.can_submit());
        let err = form.begin().unwrap_err();
        assert!(err.is_validation());
        assert!(!form.is_uploading());
        assert_eq!(form.advisory(), Some((AdvisoryKind::Error, NO_FILE_ADVISORY)));
    }

    #[test]
    fn selecting_an_image_builds_a_preview() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        assert!(form.preview().unwrap().starts_with("data:image/png;base64,"));
        form.select(Some(UploadTarget::new("carta.pdf", None, vec![1])));
        assert_eq!(form.preview(), None);
        form.select(None);
        assert_eq!(form.selected(), None);
    }

    #[test]
    fn success_clears_the_selection() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        let target = form.begin().unwrap();
        assert_eq!(target.file_name, "carta.png");
        assert!(form.is_uploading());
        assert!(!form.can_submit());
        form.finish(Ok(receipt()));
        assert_eq!(form.selected(), None);
        assert_eq!(form.preview(), None);
        assert_eq!(form.advisory(), Some((AdvisoryKind::Success, UPLOAD_SUCCEEDED_ADVISORY)));
    }

    #[test]
    fn failure_keeps_the_selection_for_retry() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        form.begin().unwrap();
        form.finish(Err(ApiError::Server { status: 500, message: "blob storage down".to_string() }));
        assert_eq!(form.selected(), Some(&png()));
        assert!(form.preview().is_some());
        assert!(form.can_submit());
        assert_eq!(form.advisory(), Some((AdvisoryKind::Error, UPLOAD_FAILED_ADVISORY)));
    }

    #[test]
    fn rejected_file_is_not_reported_as_missing() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        form.begin().unwrap();
        form.finish(Err(ApiError::Validation("bad content type".to_string())));
        assert_eq!(form.advisory(), Some((AdvisoryKind::Error, UPLOAD_FAILED_ADVISORY)));
        assert!(form.selected().is_some());
    }

    #[test]
    fn stale_file_reads_are_ignored() {
        let mut form = UploadFormState::default();
        let big = form.start_selection();
        let small = form.start_selection();
        let pdf = UploadTarget::new("carta.pdf", None, vec![1]);
        assert!(form.complete_selection(small, Some(pdf.clone())));
        assert!(!form.complete_selection(big, Some(png())));
        assert_eq!(form.selected(), Some(&pdf));
    }

    #[test]
    fn no_resubmission_while_uploading() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        form.begin().unwrap();
        assert!(form.begin().is_err());
        assert!(form.is_uploading());
        form.select(None);
        assert!(form.selected().is_some());
    }

    #[test]
    fn new_selection_clears_previous_outcome() {
        let mut form = UploadFormState::default();
        form.select(Some(png()));
        form.begin().unwrap();
        form.finish(Ok(receipt()));
        form.select(Some(png()));
        assert_eq!(form.phase(), &UploadPhase::Idle);
        assert_eq!(form.advisory(), None);
    }
}
