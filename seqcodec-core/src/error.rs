//! # Erros Estruturais do Codec
//!
//! Toda violação das invariantes de uma sequência é **fatal**: a chamada de
//! `encode`/`decode` é abortada no ponto de detecção e nenhuma saída parcial
//! é devolvida. Não há tentativa de reparo.
//!
//! | Variante              | Situação                                              |
//! |-----------------------|-------------------------------------------------------|
//! | `MalformedSpan`       | item com `begin > end`                                |
//! | `Overlap`             | dois itens adjacentes se sobrepõem ou estão fora de ordem |
//! | `IllegalContinuation` | `I-X` sem nenhum span aberto                          |
//! | `LabelMismatch`       | `I-Y` continuando um span aberto com `B-X`            |
//! | `IllegalMarker`       | rótulo que não é `B-X`, `I-X` nem `O`                 |
//! | `OutOfOrder`          | (encode) span começa antes do cursor                  |
//! | `SpanOutOfBounds`     | (encode) span ultrapassa o comprimento declarado      |
//! | `PositionOverflow`    | `offset + length` não cabe em `usize`                 |

use crate::item::SequenceItem;

/// Result padrão do crate, com [`CodecError`] como erro.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Erros produzidos pelo codec e pela sua configuração.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// O próprio item é inválido (`begin > end`).
    #[error("illegal sequence item span: {item} (begin > end)")]
    MalformedSpan { item: SequenceItem },

    /// O item atual começa antes do fim do anterior, ou termina antes dele.
    #[error("illegal sequence item span: {current} overlaps or precedes {previous}")]
    Overlap {
        previous: SequenceItem,
        current: SequenceItem,
    },

    /// Marcador de continuação sem span aberto.
    #[error("illegal sequence continuation: {item}")]
    IllegalContinuation { item: SequenceItem },

    /// Marcador de continuação com tag diferente da do span aberto.
    #[error("illegal sequence item label: expected {expected} but was {actual} ({item})")]
    LabelMismatch {
        expected: String,
        actual: String,
        item: SequenceItem,
    },

    /// Rótulo que não corresponde a nenhuma das três formas de marcador.
    #[error("illegal sequence marker: {item}")]
    IllegalMarker { item: SequenceItem },

    /// Span fornecido ao `encode` antes da posição atual do cursor.
    #[error("illegal sequence item span: {item} starts before position {cursor}")]
    OutOfOrder { item: SequenceItem, cursor: usize },

    /// Span fornecido ao `encode` que passa do fim da sequência.
    #[error("illegal sequence item span: {item} extends past position {limit}")]
    SpanOutOfBounds { item: SequenceItem, limit: usize },

    /// A numeração `offset..offset + length` excede `usize::MAX`.
    #[error("illegal sequence item span: {length} positions starting at {offset} overflow the position range")]
    PositionOverflow { offset: usize, length: usize },

    /// Configuração de marcadores inconsistente.
    #[error("invalid codec configuration: {0}")]
    InvalidConfig(String),

    /// Falha de uma sentença dentro de um lote; `index` é a posição no lote.
    #[error("sequence {index} of batch: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Erro original, descendo através de [`CodecError::Batch`].
    pub fn root(&self) -> &CodecError {
        match self {
            CodecError::Batch { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::InvalidConfig(err.to_string())
    }
}
