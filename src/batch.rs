//! Parallel rendering for a list of subscribers
//!
//! Each subscriber gets its own RNG seeded from the base seed and its
//! position in the list, so a batch is reproducible regardless of thread
//! scheduling. One subscriber failing never stops the others.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{LifeTableError, Result};
use crate::render::{LifeTableRenderer, RenderRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub birthdate: NaiveDate,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    crate::i18n::BOT_FALLBACK_LANG.to_string()
}

/// Outcome of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub successful: usize,
    pub total: usize,
    /// Ids of subscribers whose image could not be produced
    pub failed: Vec<i64>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.successful == self.total
    }
}

/// Read a JSON array of subscribers
pub fn load_subscribers(path: &Path) -> Result<Vec<Subscriber>> {
    let to_error = |message: String| LifeTableError::SubscriberList {
        path: path.to_path_buf(),
        message: Arc::new(message),
    };

    let content = fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))
}

/// File name used for a subscriber's image
pub fn output_file_name(subscriber: &Subscriber) -> String {
    format!("life_table_{}.png", subscriber.id)
}

/// Seed of the RNG used for the subscriber at `index`
pub fn subscriber_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Render every subscriber into `output_dir`
pub fn render_batch(
    renderer: &LifeTableRenderer<'_>,
    subscribers: &[Subscriber],
    today: NaiveDate,
    output_dir: &Path,
    base_seed: u64,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir).map_err(|e| LifeTableError::FileWriteError {
        path: output_dir.to_path_buf(),
        message: Arc::new(e.to_string()),
    })?;

    info!(
        "Rendering {} life tables into {}",
        subscribers.len(),
        output_dir.display()
    );

    let outcomes: Vec<std::result::Result<PathBuf, i64>> = subscribers
        .par_iter()
        .enumerate()
        .map(|(index, subscriber)| {
            let mut rng = StdRng::seed_from_u64(subscriber_seed(base_seed, index));
            render_one(renderer, subscriber, today, output_dir, &mut rng).map_err(|e| {
                warn!("Failed to render life table for {}: {}", subscriber.id, e);
                subscriber.id
            })
        })
        .collect();

    let mut report = BatchReport {
        total: subscribers.len(),
        ..BatchReport::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(path) => {
                debug!("Wrote {}", path.display());
                report.successful += 1;
            }
            Err(id) => report.failed.push(id),
        }
    }

    info!("Batch finished: {}/{} rendered", report.successful, report.total);
    Ok(report)
}

fn render_one(
    renderer: &LifeTableRenderer<'_>,
    subscriber: &Subscriber,
    today: NaiveDate,
    output_dir: &Path,
    rng: &mut StdRng,
) -> Result<PathBuf> {
    let request = RenderRequest::new(subscriber.birthdate, subscriber.lang.as_str()).as_of(today);
    let image = renderer.render(&request, rng)?;

    let path = output_dir.join(output_file_name(subscriber));
    fs::write(&path, &image.png).map_err(|e| LifeTableError::FileWriteError {
        path: path.clone(),
        message: Arc::new(e.to_string()),
    })?;
    Ok(path)
}
