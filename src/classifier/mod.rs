//! Simulated marine species classifier.
//!
//! There is no model behind this: after a random delay a label is drawn from the
//! configured species list. The delay races a caller-supplied cancellation future.

pub mod species;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use species::DEFAULT_SPECIES;
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("image file not found: {0}")]
    FileNotFound(String),

    #[error("invalid file type provided for classification: {path} ({mime})")]
    InvalidFileType { path: String, mime: String },

    #[error("classification cancelled")]
    Cancelled,

    #[error("no species configured")]
    NoSpecies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub species: Vec<String>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: 1500,
            max_delay_ms: 2500,
            species: DEFAULT_SPECIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub path: String,
    pub mime: String,
    pub species: String,
    pub delay_ms: u64,
}

pub struct SimulatedClassifier {
    settings: ClassifierSettings,
    rng: StdRng,
}

impl SimulatedClassifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self {
            settings,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(settings: ClassifierSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the guessed MIME type when `path` exists and looks like an image.
    pub fn check_image(path: &Path) -> Result<String, ClassifyError> {
        if !path.is_file() {
            return Err(ClassifyError::FileNotFound(path.display().to_string()));
        }
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        if mime.type_().as_str() != "image" {
            return Err(ClassifyError::InvalidFileType {
                path: path.display().to_string(),
                mime: mime.essence_str().to_string(),
            });
        }
        Ok(mime.essence_str().to_string())
    }

    /// Resolves with a species label after the simulated delay, or `Cancelled`
    /// if `cancel` completes first.
    pub async fn classify<F>(
        &mut self,
        path: &Path,
        cancel: F,
    ) -> Result<Classification, ClassifyError>
    where
        F: Future<Output = ()>,
    {
        let mime = Self::check_image(path)?;
        if self.settings.species.is_empty() {
            return Err(ClassifyError::NoSpecies);
        }

        let low = self.settings.min_delay_ms.min(self.settings.max_delay_ms);
        let high = self.settings.min_delay_ms.max(self.settings.max_delay_ms);
        let delay_ms = self.rng.gen_range(low..=high);
        info!(path = %path.display(), delay_ms, "simulating classification");

        tokio::select! {
            biased;
            _ = cancel => {
                warn!(path = %path.display(), "classification cancelled");
                return Err(ClassifyError::Cancelled);
            }
            _ = tokio::time::sleep(Duration::from_millis(delay_ms)) => {}
        }

        let species = self
            .settings
            .species
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ClassifyError::NoSpecies)?;
        info!(species = %species, "classification finished");

        Ok(Classification {
            path: path.display().to_string(),
            mime,
            species,
            delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::future::pending;
    use tempfile::TempDir;

    fn instant_settings() -> ClassifierSettings {
        ClassifierSettings {
            min_delay_ms: 0,
            max_delay_ms: 1,
            ..ClassifierSettings::default()
        }
    }

    fn image_in(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, [0x89, b'P', b'N', b'G']).expect("image should write");
        path
    }

    #[tokio::test]
    async fn classifies_image_into_known_species() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = image_in(&dir, "reef.png");

        let mut classifier = SimulatedClassifier::with_seed(instant_settings(), 7);
        let result = classifier
            .classify(&path, pending())
            .await
            .expect("classification should succeed");
        assert_eq!(result.mime, "image/png");
        assert!(DEFAULT_SPECIES.contains(&result.species.as_str()));
        assert!(result.delay_ms <= 1);
    }

    #[tokio::test]
    async fn same_seed_yields_same_label() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = image_in(&dir, "turtle.jpg");

        let mut first = SimulatedClassifier::with_seed(instant_settings(), 42);
        let mut second = SimulatedClassifier::with_seed(instant_settings(), 42);
        let a = first.classify(&path, pending()).await.expect("first run");
        let b = second.classify(&path, pending()).await.expect("second run");
        assert_eq!(a.species, b.species);
        assert_eq!(a.delay_ms, b.delay_ms);
    }

    #[tokio::test]
    async fn rejects_non_image_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "not an image").expect("text should write");

        let mut classifier = SimulatedClassifier::with_seed(instant_settings(), 1);
        let err = classifier
            .classify(&path, pending())
            .await
            .expect_err("text file should be rejected");
        assert!(matches!(err, ClassifyError::InvalidFileType { .. }));
    }

    #[tokio::test]
    async fn rejects_missing_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut classifier = SimulatedClassifier::with_seed(instant_settings(), 1);
        let err = classifier
            .classify(&dir.path().join("ghost.png"), pending())
            .await
            .expect_err("missing file should be rejected");
        assert!(matches!(err, ClassifyError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn cancellation_wins_over_pending_delay() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = image_in(&dir, "clam.gif");
        let settings = ClassifierSettings {
            min_delay_ms: 60_000,
            max_delay_ms: 60_000,
            ..ClassifierSettings::default()
        };

        let mut classifier = SimulatedClassifier::with_seed(settings, 3);
        let err = classifier
            .classify(&path, async {})
            .await
            .expect_err("ready cancellation should win");
        assert_eq!(err, ClassifyError::Cancelled);
    }

    #[tokio::test]
    async fn empty_species_list_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = image_in(&dir, "coral.png");
        let settings = ClassifierSettings {
            species: Vec::new(),
            ..instant_settings()
        };

        let mut classifier = SimulatedClassifier::with_seed(settings, 3);
        let err = classifier
            .classify(&path, pending())
            .await
            .expect_err("no species should fail");
        assert_eq!(err, ClassifyError::NoSpecies);
    }
}
