//! # Itens de Sequência
//!
//! [`SequenceItem`] é o único tipo de valor trocado com o codec, tanto na forma
//! **codificada** (uma posição por item, rótulo com marcador: `B-ORG`, `I-ORG`, `O`)
//! quanto na forma **decodificada** (um span contíguo por item, rótulo sem marcador).
//!
//! As posições são **inclusivas** nas duas pontas: o item `(3, 5, "LOC")` cobre
//! as posições 3, 4 e 5.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Um intervalo de posições com um rótulo associado.
///
/// # Exemplo
/// Em "Universidade de São Paulo" (posições 1..=4), o trecho "São Paulo":
/// `SequenceItem { begin: 3, end: 4, label: "LOC" }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceItem {
    /// Posição inicial (inclusiva)
    pub begin: usize,
    /// Posição final (inclusiva)
    pub end: usize,
    /// Rótulo (com ou sem marcador, conforme a forma)
    pub label: String,
}

impl SequenceItem {
    pub fn new(begin: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            label: label.into(),
        }
    }

    /// Item de uma única posição (forma codificada).
    pub fn at(position: usize, label: impl Into<String>) -> Self {
        Self::new(position, position, label)
    }

    /// `true` se `begin <= end`.
    pub fn is_well_formed(&self) -> bool {
        self.begin <= self.end
    }
}

impl fmt::Display for SequenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}] {}", self.begin, self.end, self.label)
    }
}

impl<S: Into<String>> From<(usize, usize, S)> for SequenceItem {
    fn from((begin, end, label): (usize, usize, S)) -> Self {
        Self::new(begin, end, label)
    }
}
