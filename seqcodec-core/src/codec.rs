//! # Codec de Sequências BIO
//!
//! Converte entre as duas representações de uma sequência rotulada:
//!
//! - **Decodificada**: lista ordenada de spans contíguos e disjuntos
//!   (`[0-1] ORG`, `[3-3] LOC`).
//! - **Codificada**: um rótulo com marcador por posição
//!   (`B-ORG`, `I-ORG`, `O`, `B-LOC`).
//!
//! ## Decodificação (máquina de estados)
//!
//! ```text
//! Estados: SemSpan | SpanAberto(tag, início)
//!
//! B-X → fecha o span aberto (se houver) e abre SpanAberto(X, posição)
//! I-X → exige SpanAberto com a mesma tag X; nada é fechado
//! O   → fecha o span aberto (se houver) → SemSpan
//! fim → SpanAberto é fechado na última posição
//! ```
//!
//! ## Codificação
//!
//! Um cursor parte de `offset` e avança uma posição por item emitido:
//! preenchimento `O` até o início do span, um `B-X`, e `I-X` até o fim do span.
//! Ao final, `O` até cobrir exatamente `[offset, offset + length)`.
//!
//! Qualquer violação estrutural aborta a chamada com um [`CodecError`];
//! nunca há saída parcial.
//!
//! ## Exemplo
//!
//! ```rust
//! use seqcodec_core::{SequenceCodec, SequenceItem};
//!
//! let codec = SequenceCodec::with_offset(0);
//! let encoded = vec![
//!     SequenceItem::at(0, "B-ORG"),
//!     SequenceItem::at(1, "I-ORG"),
//!     SequenceItem::at(2, "O"),
//!     SequenceItem::at(3, "B-LOC"),
//! ];
//!
//! let decoded = codec.decode(&encoded).unwrap();
//! assert_eq!(decoded, vec![SequenceItem::new(0, 1, "ORG"), SequenceItem::new(3, 3, "LOC")]);
//! assert_eq!(codec.encode(&decoded, 4).unwrap(), encoded);
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::item::SequenceItem;
use crate::marker::Marker;

/// Teto da reserva inicial do `encode`; sequências maiores crescem sob demanda.
const PREALLOCATED_ITEMS: usize = 4096;

/// Span aberto durante a decodificação.
#[derive(Debug, Clone, Copy)]
struct OpenSpan<'a> {
    tag: &'a str,
    begin: usize,
}

impl OpenSpan<'_> {
    fn close(self, end: usize) -> SequenceItem {
        trace!(begin = self.begin, end, tag = self.tag, "span closed");
        SequenceItem::new(self.begin, end, self.tag)
    }
}

/// Transcodificador entre spans e marcadores BIO por posição.
///
/// Não guarda estado entre chamadas além da configuração, portanto pode ser
/// compartilhado entre threads (`&SequenceCodec` é `Send + Sync`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCodec {
    config: CodecConfig,
}

impl SequenceCodec {
    /// Cria o codec após validar a configuração.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Marcadores padrão com outra numeração para a primeira posição.
    pub fn with_offset(offset: usize) -> Self {
        Self {
            config: CodecConfig::default().with_offset(offset),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodifica uma sequência de itens marcados em spans.
    ///
    /// Os spans retornados seguem a ordem em que seus marcadores de início
    /// aparecem na entrada.
    pub fn decode(&self, encoded: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        debug!(items = encoded.len(), "decoding sequence");

        let mut decoded = Vec::new();
        let mut open: Option<OpenSpan<'_>> = None;
        let mut previous: Option<&SequenceItem> = None;

        for item in encoded {
            check_item_span(previous, item).map_err(reject)?;
            // Um span aberto termina no fim do item anterior
            let previous_end = previous.map_or(item.begin, |prev| prev.end);

            match self.config.parse_marker(&item.label) {
                Some(Marker::Begin(tag)) => {
                    if let Some(span) = open.take() {
                        decoded.push(span.close(previous_end));
                    }
                    trace!(begin = item.begin, tag, "span opened");
                    open = Some(OpenSpan {
                        tag,
                        begin: item.begin,
                    });
                }
                Some(Marker::Inside(tag)) => match open {
                    None => {
                        return Err(reject(CodecError::IllegalContinuation { item: item.clone() }));
                    }
                    Some(span) if span.tag != tag => {
                        return Err(reject(CodecError::LabelMismatch {
                            expected: span.tag.to_string(),
                            actual: tag.to_string(),
                            item: item.clone(),
                        }));
                    }
                    Some(_) => {}
                },
                Some(Marker::Outside) => {
                    if let Some(span) = open.take() {
                        decoded.push(span.close(previous_end));
                    }
                }
                None => {
                    return Err(reject(CodecError::IllegalMarker { item: item.clone() }));
                }
            }

            previous = Some(item);
        }

        if let (Some(span), Some(last)) = (open, previous) {
            decoded.push(span.close(last.end));
        }

        debug!(spans = decoded.len(), "sequence decoded");
        Ok(decoded)
    }

    /// Codifica spans em uma sequência de `length` itens marcados,
    /// numerados de `offset` a `offset + length - 1`.
    pub fn encode(&self, decoded: &[SequenceItem], length: usize) -> Result<Vec<SequenceItem>> {
        debug!(spans = decoded.len(), length, "encoding sequence");

        let mut idx = self.config.offset;
        let limit = self.config.position_limit(length).map_err(reject)?;
        let mut encoded = Vec::with_capacity(length.min(PREALLOCATED_ITEMS));

        for span in decoded {
            if idx > span.begin {
                return Err(reject(CodecError::OutOfOrder {
                    item: span.clone(),
                    cursor: idx,
                }));
            }
            if !span.is_well_formed() {
                return Err(reject(CodecError::MalformedSpan { item: span.clone() }));
            }
            if span.end >= limit {
                return Err(reject(CodecError::SpanOutOfBounds {
                    item: span.clone(),
                    limit,
                }));
            }
            if span.label.is_empty() {
                return Err(reject(CodecError::IllegalMarker { item: span.clone() }));
            }

            while idx < span.begin {
                encoded.push(SequenceItem::at(idx, self.config.outside_marker.as_str()));
                idx += 1;
            }

            encoded.push(SequenceItem::at(
                idx,
                self.config.render(&Marker::Begin(span.label.as_str())),
            ));
            idx += 1;

            while idx <= span.end {
                encoded.push(SequenceItem::at(
                    idx,
                    self.config.render(&Marker::Inside(span.label.as_str())),
                ));
                idx += 1;
            }
        }

        while idx < limit {
            encoded.push(SequenceItem::at(idx, self.config.outside_marker.as_str()));
            idx += 1;
        }

        debug!(items = encoded.len(), "sequence encoded");
        Ok(encoded)
    }

    /// Decodifica uma coluna de rótulos, numerando as posições a partir de `offset`.
    pub fn decode_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<SequenceItem>> {
        // Garante que offset + i não transborda para nenhum i
        self.config.position_limit(labels.len()).map_err(reject)?;
        let encoded: Vec<SequenceItem> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| SequenceItem::at(self.config.offset + i, label.as_ref()))
            .collect();
        self.decode(&encoded)
    }

    /// Codifica spans e devolve apenas a coluna de rótulos.
    pub fn encode_labels(&self, decoded: &[SequenceItem], length: usize) -> Result<Vec<String>> {
        Ok(self
            .encode(decoded, length)?
            .into_iter()
            .map(|item| item.label)
            .collect())
    }

    /// Decodifica várias sequências independentes em paralelo (Rayon).
    ///
    /// A ordem da saída é a da entrada. Em caso de falha, o erro da sequência
    /// de menor índice é devolvido dentro de [`CodecError::Batch`].
    pub fn decode_batch(&self, sequences: &[Vec<SequenceItem>]) -> Result<Vec<Vec<SequenceItem>>> {
        debug!(sequences = sequences.len(), "decoding batch");
        let results: Vec<Result<Vec<SequenceItem>>> = sequences
            .par_iter()
            .map(|sequence| self.decode(sequence))
            .collect();
        collect_batch(results)
    }

    /// Codifica vários pares `(spans, length)` em paralelo (Rayon).
    pub fn encode_batch(
        &self,
        sequences: &[(Vec<SequenceItem>, usize)],
    ) -> Result<Vec<Vec<SequenceItem>>> {
        debug!(sequences = sequences.len(), "encoding batch");
        let results: Vec<Result<Vec<SequenceItem>>> = sequences
            .par_iter()
            .map(|(spans, length)| self.encode(spans, *length))
            .collect();
        collect_batch(results)
    }
}

/// Invariantes de posição de um item em relação ao anterior.
fn check_item_span(previous: Option<&SequenceItem>, item: &SequenceItem) -> Result<()> {
    if !item.is_well_formed() {
        return Err(CodecError::MalformedSpan { item: item.clone() });
    }
    if let Some(prev) = previous {
        if item.begin < prev.end || prev.end > item.end {
            return Err(CodecError::Overlap {
                previous: prev.clone(),
                current: item.clone(),
            });
        }
    }
    Ok(())
}

fn reject(err: CodecError) -> CodecError {
    debug!(error = %err, "rejecting sequence");
    err
}

fn collect_batch(results: Vec<Result<Vec<SequenceItem>>>) -> Result<Vec<Vec<SequenceItem>>> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|source| CodecError::Batch {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
