//! # Configuração do Codec
//!
//! Os três marcadores e o offset de numeração são fixados na construção do
//! [`SequenceCodec`](crate::SequenceCodec) e nunca mudam depois.
//!
//! ```rust
//! use seqcodec_core::CodecConfig;
//!
//! // Campos ausentes assumem o padrão ("B-", "I-", "O", offset 1)
//! let config = CodecConfig::from_json(r#"{ "offset": 0 }"#).unwrap();
//! assert_eq!(config.begin_marker, "B-");
//! assert_eq!(config.offset, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Prefixo padrão de início de span.
pub const DEFAULT_BEGIN_MARKER: &str = "B-";
/// Prefixo padrão de continuação de span.
pub const DEFAULT_CONTINUE_MARKER: &str = "I-";
/// Rótulo padrão de posição fora de qualquer span.
pub const DEFAULT_OUTSIDE_MARKER: &str = "O";
/// Numeração padrão da primeira posição codificada.
pub const DEFAULT_OFFSET: usize = 1;

/// Marcadores do esquema BIO e offset de numeração.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Prefixo da primeira posição de um span (ex: "B-")
    pub begin_marker: String,
    /// Prefixo das posições seguintes do mesmo span (ex: "I-")
    pub continue_marker: String,
    /// Rótulo literal das posições fora de span (ex: "O")
    pub outside_marker: String,
    /// Número da primeira posição na forma codificada.
    /// Usado apenas pelo `encode` para numerar os itens de preenchimento.
    pub offset: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            begin_marker: DEFAULT_BEGIN_MARKER.to_string(),
            continue_marker: DEFAULT_CONTINUE_MARKER.to_string(),
            outside_marker: DEFAULT_OUTSIDE_MARKER.to_string(),
            offset: DEFAULT_OFFSET,
        }
    }
}

impl CodecConfig {
    /// Lê a configuração de um documento JSON e a valida.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Primeira posição depois de uma sequência de `length` itens.
    pub fn position_limit(&self, length: usize) -> Result<usize> {
        self.offset
            .checked_add(length)
            .ok_or(CodecError::PositionOverflow {
                offset: self.offset,
                length,
            })
    }

    /// Garante que todo rótulo seja classificável de forma não ambígua.
    ///
    /// Regras:
    /// - nenhum marcador vazio
    /// - os prefixos de início e continuação diferem e nenhum é prefixo do outro
    /// - o marcador "fora" não começa com nenhum dos dois prefixos
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("begin_marker", &self.begin_marker),
            ("continue_marker", &self.continue_marker),
            ("outside_marker", &self.outside_marker),
        ];
        for (name, value) in markers {
            if value.is_empty() {
                return Err(CodecError::InvalidConfig(format!("{name} must not be empty")));
            }
        }

        if self.begin_marker.starts_with(self.continue_marker.as_str())
            || self.continue_marker.starts_with(self.begin_marker.as_str())
        {
            return Err(CodecError::InvalidConfig(format!(
                "begin marker {:?} and continue marker {:?} are ambiguous",
                self.begin_marker, self.continue_marker
            )));
        }

        if self.outside_marker.starts_with(self.begin_marker.as_str())
            || self.outside_marker.starts_with(self.continue_marker.as_str())
        {
            return Err(CodecError::InvalidConfig(format!(
                "outside marker {:?} starts with a span prefix",
                self.outside_marker
            )));
        }

        Ok(())
    }
}
