//! # Marcadores BIO
//!
//! Visão tipada de um rótulo codificado, sob uma dada [`CodecConfig`]:
//!
//! - `B-TAG`: Begin: primeira posição de um span
//! - `I-TAG`: Inside: posições seguintes do **mesmo** span
//! - `O`: Outside: posição fora de qualquer span
//!
//! Os prefixos são configuráveis; os exemplos usam os padrões.

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::item::SequenceItem;

/// Marcador de uma posição, com a tag já sem prefixo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker<'a> {
    /// **Begin**: início de um span. Ex: **São** (B-LOC) Paulo.
    Begin(&'a str),
    /// **Inside**: continuação de um span. Ex: São **Paulo** (I-LOC).
    Inside(&'a str),
    /// **Outside**: a posição não pertence a nenhum span.
    Outside,
}

impl<'a> Marker<'a> {
    /// Tag semântica (para B- e I-).
    pub fn tag(&self) -> Option<&'a str> {
        match self {
            Marker::Begin(tag) | Marker::Inside(tag) => Some(*tag),
            Marker::Outside => None,
        }
    }

    /// Verifica se a transição `prev → next` é válida no esquema BIO.
    ///
    /// Regras:
    /// - `I-X` só pode seguir `B-X` ou `I-X` (mesma tag)
    /// - `I-X` no início da sequência (`prev == None`) é inválido
    /// - `B-X` e `O` podem seguir qualquer marcador
    pub fn is_valid_transition(prev: Option<&Marker<'_>>, next: &Marker<'_>) -> bool {
        match next {
            Marker::Inside(tag) => match prev {
                Some(Marker::Begin(prev_tag)) | Some(Marker::Inside(prev_tag)) => prev_tag == tag,
                _ => false,
            },
            _ => true,
        }
    }
}

impl CodecConfig {
    /// Classifica um rótulo codificado. `None` para marcador ilegal.
    ///
    /// Um prefixo sem tag (ex: "B-") é ilegal.
    pub fn parse_marker<'a>(&self, label: &'a str) -> Option<Marker<'a>> {
        if let Some(tag) = label.strip_prefix(self.begin_marker.as_str()) {
            return (!tag.is_empty()).then_some(Marker::Begin(tag));
        }
        if let Some(tag) = label.strip_prefix(self.continue_marker.as_str()) {
            return (!tag.is_empty()).then_some(Marker::Inside(tag));
        }
        (label == self.outside_marker).then_some(Marker::Outside)
    }

    /// Representação textual do marcador (ex: `Begin("PER")` → "B-PER").
    pub fn render(&self, marker: &Marker<'_>) -> String {
        match marker {
            Marker::Begin(tag) => format!("{}{}", self.begin_marker, tag),
            Marker::Inside(tag) => format!("{}{}", self.continue_marker, tag),
            Marker::Outside => self.outside_marker.clone(),
        }
    }
}

/// Valida uma coluna de rótulos sem construir spans.
///
/// Retorna o primeiro marcador ilegal ou a primeira transição inválida,
/// com o item numerado a partir de `config.offset`.
pub fn validate_labels<S: AsRef<str>>(config: &CodecConfig, labels: &[S]) -> Result<()> {
    config.position_limit(labels.len())?;
    let mut prev: Option<Marker<'_>> = None;

    for (i, label) in labels.iter().enumerate() {
        let label = label.as_ref();
        let item = || SequenceItem::at(config.offset + i, label);

        let marker = config
            .parse_marker(label)
            .ok_or_else(|| CodecError::IllegalMarker { item: item() })?;

        if !Marker::is_valid_transition(prev.as_ref(), &marker) {
            return Err(match (prev.as_ref().and_then(Marker::tag), marker.tag()) {
                (Some(expected), Some(actual)) => CodecError::LabelMismatch {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                    item: item(),
                },
                _ => CodecError::IllegalContinuation { item: item() },
            });
        }
        prev = Some(marker);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker() {
        let config = CodecConfig::default();
        assert_eq!(config.parse_marker("O"), Some(Marker::Outside));
        assert_eq!(config.parse_marker("B-PER"), Some(Marker::Begin("PER")));
        assert_eq!(config.parse_marker("I-LOC"), Some(Marker::Inside("LOC")));
        assert_eq!(config.parse_marker("ORG"), None);
        assert_eq!(config.parse_marker("B-"), None);
        assert_eq!(config.parse_marker(""), None);
    }

    #[test]
    fn test_render_custom_markers() {
        let config = CodecConfig {
            begin_marker: "S:".to_string(),
            continue_marker: "C:".to_string(),
            outside_marker: "-".to_string(),
            offset: 0,
        };
        assert_eq!(config.render(&Marker::Begin("ORG")), "S:ORG");
        assert_eq!(config.render(&Marker::Inside("ORG")), "C:ORG");
        assert_eq!(config.render(&Marker::Outside), "-");
        assert_eq!(config.parse_marker("C:ORG"), Some(Marker::Inside("ORG")));
    }

    #[test]
    fn test_valid_transitions() {
        assert!(Marker::is_valid_transition(
            Some(&Marker::Begin("PER")),
            &Marker::Inside("PER")
        ));
        assert!(!Marker::is_valid_transition(
            Some(&Marker::Outside),
            &Marker::Inside("PER")
        ));
        assert!(!Marker::is_valid_transition(
            Some(&Marker::Begin("ORG")),
            &Marker::Inside("PER")
        ));
        assert!(!Marker::is_valid_transition(None, &Marker::Inside("PER")));
        assert!(Marker::is_valid_transition(None, &Marker::Begin("PER")));
    }

    #[test]
    fn test_validate_labels() {
        let config = CodecConfig::default();
        assert!(validate_labels(&config, &["O", "B-PER", "I-PER", "O"]).is_ok());

        let err = validate_labels(&config, &["I-PER"]).unwrap_err();
        assert_eq!(
            err,
            CodecError::IllegalContinuation {
                item: SequenceItem::at(1, "I-PER")
            }
        );

        let err = validate_labels(&config, &["B-PER", "I-LOC"]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LabelMismatch { ref expected, ref actual, .. }
                if expected == "PER" && actual == "LOC"
        ));

        let err = validate_labels(&config, &["O", "PER"]).unwrap_err();
        assert!(matches!(err, CodecError::IllegalMarker { .. }));

        let config = CodecConfig::default().with_offset(usize::MAX);
        let err = validate_labels(&config, &["O", "O"]).unwrap_err();
        assert!(matches!(err, CodecError::PositionOverflow { length: 2, .. }));
    }
}
