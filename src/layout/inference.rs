// Tue Jan 13 2026 - Alex

use crate::config::InferenceConfig;
use crate::layout::{stride, AccessPattern, LayoutError, LayoutValidator, OverlapResolver, RecoveredType, StructureBuilder};
use crate::utils::logging::scoped_timer;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Recovers the shape of an object from the accesses observed against it.
pub struct TypeInference {
    config: InferenceConfig,
    pool: Option<ThreadPool>,
}

impl TypeInference {
    pub fn new(config: InferenceConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let pool = build_pool(&config)?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Threads available to `infer_all`; 1 when batches run sequentially.
    pub fn thread_count(&self) -> usize {
        self.pool.as_ref().map_or(1, ThreadPool::current_num_threads)
    }

    pub fn infer(&self, patterns: &[AccessPattern]) -> Result<RecoveredType, LayoutError> {
        if self.config.validate_input {
            patterns.iter().try_for_each(AccessPattern::validate)?;
        }

        let ty = self.infer_at_depth(patterns.to_vec(), 0)?;

        if self.config.validate_output {
            LayoutValidator::new().validate(&ty)?;
        }

        log::debug!("inferred {} from {} pattern(s)", ty, patterns.len());
        Ok(ty)
    }

    /// One type per object, in input order. Large batches run on the rayon
    /// pool built with this instance; the first failure aborts the batch.
    pub fn infer_all(&self, objects: &[Vec<AccessPattern>]) -> Result<Vec<RecoveredType>, LayoutError> {
        let _timer = scoped_timer("infer_all");

        match &self.pool {
            Some(pool) if objects.len() >= self.config.min_parallel_batch => {
                log::debug!("inferring {} objects on {} threads", objects.len(), pool.current_num_threads());
                pool.install(|| objects.par_iter().map(|patterns| self.infer(patterns)).collect())
            }
            _ => objects.iter().map(|patterns| self.infer(patterns)).collect(),
        }
    }

    fn infer_at_depth(&self, patterns: Vec<AccessPattern>, depth: usize) -> Result<RecoveredType, LayoutError> {
        if depth > self.config.max_depth {
            return Err(LayoutError::DepthExceeded(self.config.max_depth));
        }

        if patterns.is_empty() {
            return Ok(RecoveredType::empty_struct());
        }

        if let [only] = patterns.as_slice() {
            if only.base == 0 && !only.is_repeated() {
                return Ok(RecoveredType::Scalar(only.access_size));
            }
        }

        let members = stride::decompose(patterns, |window| self.infer_at_depth(window, depth + 1))?;
        let members = OverlapResolver::new().resolve(members)?;
        Ok(StructureBuilder::from_members(members).build())
    }
}

impl Default for TypeInference {
    fn default() -> Self {
        let config = InferenceConfig::default();
        let pool = match build_pool(&config) {
            Ok(pool) => pool,
            Err(e) => {
                log::warn!("Batches will run sequentially: {}", e);
                None
            }
        };
        Self { config, pool }
    }
}

fn build_pool(config: &InferenceConfig) -> Result<Option<ThreadPool>, LayoutError> {
    if !config.parallel {
        return Ok(None);
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads)
        .build()
        .map(Some)
        .map_err(|e| LayoutError::ThreadPool(e.to_string()))
}

/// Infers one object with the default configuration, without a batch pool.
pub fn infer_type(patterns: &[AccessPattern]) -> Result<RecoveredType, LayoutError> {
    let inference = TypeInference {
        config: InferenceConfig::default().with_parallel(false),
        pool: None,
    };
    inference.infer(patterns)
}
