//! Charge settings: the immutable snapshot the engine calculates from, and a
//! small JSON-file store for it.
//!
//! The engine never reaches into storage on its own; the orchestration layer
//! loads a [`ChargeSettings`] snapshot here and passes it in. A missing or
//! unreadable settings file degrades to defaults instead of failing the
//! issuance flow.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::calendar::JalaliDate;
use crate::domain::{CalculationType, ChargeCategory};
use crate::errors::BuildingError;

const SETTINGS_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Building-wide multipliers applied by the charge engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coefficients {
    /// Default commercial multiplier seeded onto new categories.
    pub commercial: f64,
    /// Building-wide factor composed with each unit's own floor coefficient.
    pub floor: f64,
    /// Factor on per-parking-slot amounts.
    pub parking: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            commercial: 1.5,
            floor: 1.0,
            parking: 1.0,
        }
    }
}

/// Snapshot of everything the charge engine needs for one fiscal year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeSettings {
    pub fiscal_year: i32,
    #[serde(default)]
    pub coefficients: Coefficients,
    #[serde(default)]
    pub categories: Vec<ChargeCategory>,
}

impl Default for ChargeSettings {
    fn default() -> Self {
        Self {
            fiscal_year: JalaliDate::today().year(),
            coefficients: Coefficients::default(),
            categories: Vec::new(),
        }
    }
}

impl ChargeSettings {
    pub fn new(fiscal_year: i32) -> Self {
        Self {
            fiscal_year,
            ..Self::default()
        }
    }

    /// Builds a category seeded with this snapshot's default commercial
    /// multiplier.
    pub fn new_category(
        &self,
        title: impl Into<String>,
        base_amount: i64,
        calculation_type: CalculationType,
    ) -> ChargeCategory {
        ChargeCategory::new(title, base_amount, calculation_type)
            .with_commercial_multiplier(self.coefficients.commercial)
    }

    pub fn active_categories(&self) -> Vec<&ChargeCategory> {
        self.categories.iter().filter(|cat| cat.is_active).collect()
    }

    pub fn active_category_ids(&self) -> Vec<uuid::Uuid> {
        self.categories
            .iter()
            .filter(|cat| cat.is_active)
            .map(|cat| cat.id)
            .collect()
    }
}

/// Loads and saves per-fiscal-year [`ChargeSettings`] files.
pub struct SettingsManager {
    dir: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Result<Self, BuildingError> {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("buildino");
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Result<Self, BuildingError> {
        let dir = base.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Loads the settings for a fiscal year, degrading to defaults when the
    /// file is missing or unreadable. Categories that violate the charge
    /// invariants are dropped with a diagnostic rather than failing the load.
    pub fn load(&self, fiscal_year: i32) -> ChargeSettings {
        let path = self.settings_path(fiscal_year);
        if !path.exists() {
            return ChargeSettings::new(fiscal_year);
        }
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => sanitize(settings),
                Err(error) => {
                    tracing::warn!(%error, path = %path.display(), "unreadable charge settings, using defaults");
                    ChargeSettings::new(fiscal_year)
                }
            },
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "cannot read charge settings, using defaults");
                ChargeSettings::new(fiscal_year)
            }
        }
    }

    /// Persists the settings atomically (write to a tmp file, then rename).
    pub fn save(&self, settings: &ChargeSettings) -> Result<(), BuildingError> {
        let path = self.settings_path(settings.fiscal_year);
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn settings_path(&self, fiscal_year: i32) -> PathBuf {
        self.dir
            .join(format!("charge-settings-{fiscal_year}.{SETTINGS_EXTENSION}"))
    }
}

fn sanitize(mut settings: ChargeSettings) -> ChargeSettings {
    settings.categories.retain(|category| match category.validate() {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(
                title = %category.title,
                %error,
                "dropping invalid charge category from settings"
            );
            false
        }
    });
    settings
}

fn ensure_dir(path: &Path) -> Result<(), BuildingError> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BuildingError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
