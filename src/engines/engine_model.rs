//! Model-driven engine.
//!
//! A `MovePredictor` scores every pit of the mover's row from the side-relative
//! feature vector (`PlayerView::allpits`). The engine plays the best-scoring
//! pit that is actually eligible, so a model that favours an empty pit can
//! never produce an illegal move.

use crate::board::board_state::Board;
use crate::board::player::Player;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::engines::player_view::PlayerView;

pub trait MovePredictor: Send {
    /// One score per pit of the mover's row; higher is better.
    fn scores(&self, features: &[u32]) -> Result<Vec<f64>, String>;
}

/// Linear policy: `score[pit] = weights[pit] · features + bias[pit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPolicy {
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl LinearPolicy {
    /// `weights` holds one row per pit, each `2 * pit_count` wide.
    pub fn new(weights: Vec<Vec<f64>>, bias: Vec<f64>) -> Result<Self, String> {
        let pit_count = weights.len();
        if pit_count == 0 {
            return Err("linear policy needs at least one pit".to_owned());
        }
        if bias.len() != pit_count {
            return Err(format!(
                "bias has {} entries, expected {pit_count}",
                bias.len()
            ));
        }
        if let Some(row) = weights.iter().find(|row| row.len() != 2 * pit_count) {
            return Err(format!(
                "weight row has {} entries, expected {}",
                row.len(),
                2 * pit_count
            ));
        }
        Ok(Self { weights, bias })
    }

    /// Untrained prior: each pit is rewarded for the stones it holds and for
    /// sitting close to the store.
    pub fn store_proximity(pit_count: usize) -> Self {
        let weights = (0..pit_count)
            .map(|pit| {
                let mut row = vec![0.0; 2 * pit_count];
                row[pit] = 0.25;
                row
            })
            .collect();
        let bias = (0..pit_count).map(|pit| pit as f64).collect();
        Self { weights, bias }
    }

    #[inline]
    pub fn pit_count(&self) -> usize {
        self.weights.len()
    }
}

impl MovePredictor for LinearPolicy {
    fn scores(&self, features: &[u32]) -> Result<Vec<f64>, String> {
        if features.len() != 2 * self.pit_count() {
            return Err(format!(
                "linear policy expects {} features, got {}",
                2 * self.pit_count(),
                features.len()
            ));
        }
        Ok(self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                row.iter()
                    .zip(features)
                    .map(|(w, &x)| w * f64::from(x))
                    .sum::<f64>()
                    + bias
            })
            .collect())
    }
}

pub struct ModelEngine<P: MovePredictor> {
    predictor: P,
}

impl<P: MovePredictor> ModelEngine<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }
}

impl<P: MovePredictor> Engine for ModelEngine<P> {
    fn name(&self) -> &str {
        "PlumMancala Model"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let view = PlayerView::new(board, player);
        let scores = self.predictor.scores(&view.allpits())?;

        let mut out = EngineOutput::default();
        let mut best: Option<(usize, f64)> = None;
        for pit in view.eligible_moves() {
            let Some(&score) = scores.get(pit) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pit, score));
            }
        }

        if let Some((pit, score)) = best {
            out.info_lines.push(format!(
                "info string model_engine pit {pit} score {score:.3}"
            ));
            out.best_move = Some(pit);
        } else {
            out.info_lines
                .push("info string model_engine no_scored_move".to_owned());
        }
        Ok(out)
    }
}
