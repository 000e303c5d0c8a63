//! The editor session: an explicit state container for the client side.
//!
//! One session owns the displayed routine, its raw-JSON editing mirror,
//! the pending input (text + optional image), and the durable storage
//! slot. The generation phase (`Idle`/`Generating`) and the view mode
//! (`Viewing`/`EditingRaw`) are orthogonal.

pub mod client;
pub mod image;
pub mod storage;

pub use client::{ClientError, GenerateClient, HttpGenerateClient};
pub use image::{ImageAttachment, MAX_IMAGE_BYTES};
pub use storage::RoutineStore;

use thiserror::Error;

use crate::routine::Routine;

/// Failures reported to the user by editor operations.
///
/// All of these are recovered locally: the operation is aborted and no
/// session state or storage is mutated beyond what each variant documents.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("describe the routine you want before generating")]
    EmptyPrompt,

    #[error("image is too large ({size} bytes; the limit is {limit} bytes)")]
    ImageTooLarge { size: usize, limit: usize },

    #[error("routine JSON is invalid: {0}")]
    InvalidJson(String),

    #[error("there is no routine to save yet")]
    NothingToSave,

    #[error("could not write the saved routine: {0}")]
    Storage(String),

    #[error(transparent)]
    Generation(#[from] ClientError),
}

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratePhase {
    Idle,
    Generating,
}

/// How the current routine is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Viewing,
    EditingRaw,
}

pub struct EditorSession<C> {
    input: String,
    image: Option<ImageAttachment>,
    routine: Option<Routine>,
    raw_json: String,
    phase: GeneratePhase,
    mode: ViewMode,
    store: RoutineStore,
    client: C,
}

impl<C> EditorSession<C> {
    /// Start a session, reading the storage slot exactly once.
    ///
    /// A read or parse failure is logged and leaves the session empty;
    /// it is not surfaced to the user.
    pub fn start(store: RoutineStore, client: C) -> Self {
        let mut session = Self {
            input: String::new(),
            image: None,
            routine: None,
            raw_json: String::new(),
            phase: GeneratePhase::Idle,
            mode: ViewMode::Viewing,
            store,
            client,
        };

        match session.store.load() {
            Ok(Some(routine)) => session.replace_routine(routine),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load saved routine: {:#}", e),
        }

        session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn routine(&self) -> Option<&Routine> {
        self.routine.as_ref()
    }

    pub fn raw_json(&self) -> &str {
        &self.raw_json
    }

    pub fn phase(&self) -> GeneratePhase {
        self.phase
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    /// Unconstrained free-text capture.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Select a reference image. Oversized files are rejected with no
    /// state change; an accepted file replaces any prior selection and is
    /// encoded only at generation time.
    pub fn select_image(
        &mut self,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), EditorError> {
        let attachment = ImageAttachment::new(filename, bytes)?;
        self.image = Some(attachment);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Replace the edit buffer while in raw-JSON editing mode.
    pub fn set_raw_json(&mut self, text: impl Into<String>) {
        self.raw_json = text.into();
    }

    /// Toggle between viewing and raw-JSON editing.
    ///
    /// Leaving edit mode re-parses the buffer; on failure the session
    /// stays in edit mode with the buffer and displayed routine intact.
    pub fn toggle_edit(&mut self) -> Result<(), EditorError> {
        match self.mode {
            ViewMode::Viewing => {
                self.mode = ViewMode::EditingRaw;
                Ok(())
            }
            ViewMode::EditingRaw => {
                let routine: Routine = serde_json::from_str(&self.raw_json)
                    .map_err(|e| EditorError::InvalidJson(e.to_string()))?;
                self.routine = Some(routine);
                self.mode = ViewMode::Viewing;
                Ok(())
            }
        }
    }

    /// Persist the currently displayed routine to the storage slot.
    ///
    /// In edit mode the buffer is parsed first; malformed JSON aborts the
    /// save and leaves storage and edit mode unchanged. A successful save
    /// from edit mode commits the parsed routine and returns to viewing.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let routine = match self.mode {
            ViewMode::EditingRaw => serde_json::from_str(&self.raw_json)
                .map_err(|e| EditorError::InvalidJson(e.to_string()))?,
            ViewMode::Viewing => self.routine.clone().ok_or(EditorError::NothingToSave)?,
        };

        self.store
            .save(&routine)
            .map_err(|e| EditorError::Storage(e.to_string()))?;

        self.replace_routine(routine);
        self.mode = ViewMode::Viewing;
        Ok(())
    }

    fn replace_routine(&mut self, routine: Routine) {
        self.raw_json = serde_json::to_string_pretty(&routine).unwrap_or_default();
        self.routine = Some(routine);
    }
}

impl<C: GenerateClient> EditorSession<C> {
    /// Run one generation request.
    ///
    /// Empty input aborts before any request is sent. On success the
    /// routine and its raw mirror are replaced; on failure the prior
    /// routine is retained. The session always returns to `Idle`.
    pub async fn generate(&mut self) -> Result<(), EditorError> {
        if self.input.trim().is_empty() {
            return Err(EditorError::EmptyPrompt);
        }

        self.phase = GeneratePhase::Generating;
        let image = self.image.as_ref().map(ImageAttachment::to_data_uri);
        let result = self.client.generate(&self.input, image).await;
        self.phase = GeneratePhase::Idle;

        let routine = result?;
        self.replace_routine(routine);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::routine::Step;

    /// Stub client answering with a canned result.
    struct StubClient {
        response: Result<Routine, String>,
    }

    #[async_trait]
    impl GenerateClient for StubClient {
        async fn generate(
            &self,
            _prompt: &str,
            _image: Option<String>,
        ) -> Result<Routine, ClientError> {
            match &self.response {
                Ok(routine) => Ok(routine.clone()),
                Err(message) => Err(ClientError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    fn sample_routine() -> Routine {
        Routine {
            title: "Energize".to_string(),
            description: "Quick AM boost".to_string(),
            steps: vec![Step {
                step: 1,
                action: "Stretch".to_string(),
                duration: Some("5 min".to_string()),
                notes: None,
            }],
        }
    }

    fn session_with(
        temp_dir: &TempDir,
        response: Result<Routine, String>,
    ) -> EditorSession<StubClient> {
        let store = RoutineStore::at_path(temp_dir.path().join("routine.json"));
        EditorSession::start(store, StubClient { response })
    }

    #[tokio::test]
    async fn test_generate_requires_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        session.set_input("   ");
        let result = session.generate().await;

        assert!(matches!(result, Err(EditorError::EmptyPrompt)));
        assert!(session.routine().is_none());
        assert_eq!(session.phase(), GeneratePhase::Idle);
    }

    #[tokio::test]
    async fn test_generate_success_replaces_routine_and_mirror() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        session.set_input("30-minute morning energizer");
        session.generate().await.unwrap();

        assert_eq!(session.routine().unwrap().title, "Energize");
        assert!(session.raw_json().contains("\"Energize\""));
        assert_eq!(session.phase(), GeneratePhase::Idle);
    }

    #[tokio::test]
    async fn test_generate_failure_retains_prior_routine() {
        let temp_dir = TempDir::new().unwrap();

        // Seed the slot so the session starts with a routine.
        let store = RoutineStore::at_path(temp_dir.path().join("routine.json"));
        store.save(&sample_routine()).unwrap();

        let mut session = session_with(&temp_dir, Err("provider down".to_string()));
        assert_eq!(session.routine().unwrap().title, "Energize");

        session.set_input("something new");
        let result = session.generate().await;

        assert!(matches!(result, Err(EditorError::Generation(_))));
        assert_eq!(session.routine().unwrap().title, "Energize");
        assert_eq!(session.phase(), GeneratePhase::Idle);
    }

    #[tokio::test]
    async fn test_oversized_image_rejected_without_state_change() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        let result = session.select_image("big.png", vec![0u8; MAX_IMAGE_BYTES + 1]);
        assert!(matches!(result, Err(EditorError::ImageTooLarge { .. })));
        assert!(session.image().is_none());

        session
            .select_image("ok.png", vec![0u8; 16])
            .expect("small image accepted");
        assert_eq!(session.image().unwrap().filename(), "ok.png");
    }

    #[tokio::test]
    async fn test_toggle_edit_invalid_json_stays_editing() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        session.set_input("prompt");
        session.generate().await.unwrap();

        session.toggle_edit().unwrap();
        assert_eq!(session.mode(), ViewMode::EditingRaw);

        session.set_raw_json("{ definitely broken");
        let result = session.toggle_edit();

        assert!(matches!(result, Err(EditorError::InvalidJson(_))));
        assert_eq!(session.mode(), ViewMode::EditingRaw);
        assert_eq!(session.routine().unwrap().title, "Energize");
    }

    #[tokio::test]
    async fn test_toggle_edit_valid_json_commits() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        session.set_input("prompt");
        session.generate().await.unwrap();

        session.toggle_edit().unwrap();
        session.set_raw_json(r#"{"title":"Edited","description":"","steps":[]}"#);
        session.toggle_edit().unwrap();

        assert_eq!(session.mode(), ViewMode::Viewing);
        assert_eq!(session.routine().unwrap().title, "Edited");
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trips() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut session = session_with(&temp_dir, Ok(sample_routine()));
            session.set_input("prompt");
            session.generate().await.unwrap();
            session.save().unwrap();
        }

        // A fresh session loads the slot once at startup.
        let session = session_with(&temp_dir, Err("unused".to_string()));
        assert_eq!(session.routine().unwrap(), &sample_routine());
        assert!(session.raw_json().contains("\"Energize\""));
    }

    #[tokio::test]
    async fn test_save_with_invalid_edit_leaves_storage_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = RoutineStore::at_path(temp_dir.path().join("routine.json"));
        store.save(&sample_routine()).unwrap();

        let mut session = session_with(&temp_dir, Ok(sample_routine()));
        session.toggle_edit().unwrap();
        session.set_raw_json("not json at all");

        let result = session.save();
        assert!(matches!(result, Err(EditorError::InvalidJson(_))));
        assert_eq!(session.mode(), ViewMode::EditingRaw);

        // Prior saved value is intact.
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved, sample_routine());
    }

    #[tokio::test]
    async fn test_save_with_no_routine_errors() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_with(&temp_dir, Ok(sample_routine()));

        assert!(matches!(session.save(), Err(EditorError::NothingToSave)));
    }

    #[tokio::test]
    async fn test_corrupt_slot_loads_as_empty_session() {
        let temp_dir = TempDir::new().unwrap();
        let slot = temp_dir.path().join("routine.json");
        std::fs::write(&slot, "{ corrupted").unwrap();

        let store = RoutineStore::at_path(slot);
        let session = EditorSession::start(
            store,
            StubClient {
                response: Ok(sample_routine()),
            },
        );

        assert!(session.routine().is_none());
        assert!(session.raw_json().is_empty());
    }
}
