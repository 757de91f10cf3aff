//! # seqcodec-core: Codificação BIO de Sequências Rotuladas
//!
//! Este crate converte entre duas representações de uma sequência rotulada
//! (tokens ou caracteres), independentemente de qualquer modelo de documento:
//!
//! 1.  **Forma decodificada**: spans contíguos e disjuntos
//!     (ex: "Organização cobre as posições 10 a 25").
//! 2.  **Forma codificada**: um rótulo por posição no esquema **BIO**
//!     (`B-ORG`, `I-ORG`, `O`), como nas colunas de rótulo de corpora CoNLL.
//!
//! O codec aplica as invariantes estruturais da sequência e **rejeita**
//! entradas malformadas (continuação sem início, tag trocada no meio de um span,
//! posições sobrepostas) com um [`CodecError`], em vez de produzir spans errados.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use seqcodec_core::{SequenceCodec, SequenceItem};
//!
//! // Posições numeradas a partir de 0
//! let codec = SequenceCodec::with_offset(0);
//!
//! // Saída de um etiquetador: um rótulo por token
//! let spans = codec.decode_labels(&["O", "B-PER", "I-PER", "O", "B-LOC"]).unwrap();
//! assert_eq!(spans, vec![SequenceItem::new(1, 2, "PER"), SequenceItem::new(4, 4, "LOC")]);
//!
//! // E de volta para a coluna de rótulos
//! let labels = codec.encode_labels(&spans, 5).unwrap();
//! assert_eq!(labels, vec!["O", "B-PER", "I-PER", "O", "B-LOC"]);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`codec`]: `encode`/`decode` e processamento em lote.
//! - [`config`]: marcadores e offset de numeração.
//! - [`marker`]: visão tipada dos rótulos `B-`/`I-`/`O`.
//! - [`item`]: o tipo de valor [`SequenceItem`].
//! - [`error`]: taxonomia de erros estruturais.

pub mod codec;
pub mod config;
pub mod error;
pub mod item;
pub mod marker;

pub use codec::SequenceCodec;
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use item::SequenceItem;
pub use marker::{validate_labels, Marker};
