//! Name-based engine construction for the binaries.

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_model::{LinearPolicy, ModelEngine};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::engines::engine_vector::VectorEngine;

pub const ENGINE_NAMES: [&str; 4] = ["random", "vector", "greedy", "model"];

pub type EngineFactory = fn(seed: u64, pit_count: usize) -> Box<dyn Engine>;

/// Resolve an engine name to a constructor, so series runners can build a
/// fresh engine per game without re-validating the name.
pub fn engine_factory(name: &str) -> Result<EngineFactory, String> {
    let factory: EngineFactory = match name.to_ascii_lowercase().as_str() {
        "random" => random_engine,
        "vector" => vector_engine,
        "greedy" => greedy_engine,
        "model" => model_engine,
        other => {
            return Err(format!(
                "unknown engine '{other}' (expected one of {})",
                ENGINE_NAMES.join(", ")
            ))
        }
    };
    Ok(factory)
}

pub fn engine_from_name(
    name: &str,
    seed: u64,
    pit_count: usize,
) -> Result<Box<dyn Engine>, String> {
    Ok(engine_factory(name)?(seed, pit_count))
}

fn random_engine(seed: u64, _pit_count: usize) -> Box<dyn Engine> {
    Box::new(RandomEngine::with_seed(seed))
}

fn vector_engine(seed: u64, _pit_count: usize) -> Box<dyn Engine> {
    Box::new(VectorEngine::with_seed(seed))
}

fn greedy_engine(seed: u64, _pit_count: usize) -> Box<dyn Engine> {
    Box::new(GreedyEngine::with_seed(seed))
}

fn model_engine(_seed: u64, pit_count: usize) -> Box<dyn Engine> {
    Box::new(ModelEngine::new(LinearPolicy::store_proximity(pit_count)))
}

#[cfg(test)]
mod tests {
    use super::{engine_from_name, ENGINE_NAMES};

    #[test]
    fn every_listed_engine_builds() {
        for name in ENGINE_NAMES {
            let engine = engine_from_name(name, 1, 6).expect("engine should build");
            assert!(engine.name().starts_with("PlumMancala"));
        }
        assert!(engine_from_name("Vector", 1, 6).is_ok());
    }

    #[test]
    fn unknown_engine_name_is_rejected() {
        let err = engine_from_name("minimax", 1, 6).err().expect("should fail");
        assert!(err.contains("unknown engine 'minimax'"));
    }
}
