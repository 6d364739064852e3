use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashMap;

use crate::difficulty::Difficulty;
use crate::error::QuoteError;

static QUOTE_DIR: Dir = include_dir!("src/quotes");

#[derive(Deserialize, Clone, Debug)]
struct QuoteFile {
    #[allow(dead_code)]
    name: String,
    quotes: Vec<String>,
}

/// Static mapping from difficulty to its candidate sentences
#[derive(Clone, Debug)]
pub struct QuoteBank {
    pools: HashMap<Difficulty, Vec<String>>,
}

impl QuoteBank {
    /// Load the quote pools bundled into the binary.
    pub fn embedded() -> Result<Self, QuoteError> {
        let mut pools = HashMap::new();
        for difficulty in Difficulty::ALL {
            let file = read_quote_file(&format!("{difficulty}.json"))?;
            pools.insert(difficulty, file.quotes);
        }
        Self::from_pools(pools)
    }

    /// Build a bank from explicit pools. Every tier needs at least one quote.
    pub fn from_pools(pools: HashMap<Difficulty, Vec<String>>) -> Result<Self, QuoteError> {
        for difficulty in Difficulty::ALL {
            let usable = pools
                .get(&difficulty)
                .is_some_and(|pool| pool.iter().any(|q| !q.is_empty()));
            if !usable {
                return Err(QuoteError::EmptyPool(difficulty));
            }
        }

        let pools = pools
            .into_iter()
            .map(|(d, pool)| (d, pool.into_iter().filter(|q| !q.is_empty()).collect()))
            .collect();

        Ok(Self { pools })
    }

    pub fn pool(&self, difficulty: Difficulty) -> &[String] {
        self.pools
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Uniformly random quote from the tier's pool.
    pub fn pick_quote(&self, difficulty: Difficulty) -> &str {
        self.pick_quote_with(difficulty, &mut rand::thread_rng())
    }

    /// Like [`QuoteBank::pick_quote`] but for a tier given by name; unknown
    /// names use the default tier.
    pub fn pick_quote_by_name(&self, name: &str) -> &str {
        self.pick_quote(Difficulty::from_name_or_default(name))
    }

    pub fn pick_quote_with<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> &str {
        let pool = self.pool(difficulty);
        // pools are validated non-empty in from_pools
        &pool[rng.gen_range(0..pool.len())]
    }
}

fn read_quote_file(file_name: &str) -> Result<QuoteFile, QuoteError> {
    let file = QUOTE_DIR
        .get_file(file_name)
        .ok_or_else(|| QuoteError::Missing(file_name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| QuoteError::Encoding(file_name.to_string()))?;

    from_str(file_as_str).map_err(|source| QuoteError::Malformed {
        file: file_name.to_string(),
        source,
    })
}
