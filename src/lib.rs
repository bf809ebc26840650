//! Symbol encoder for linear barcodes.
//!
//! Turns text into the ordered bar/space symbols of Code 128 (and GS1-128),
//! Code 39, Interleaved 2 of 5, EAN-13, UPC-A and EAN-8. Drawing is left to
//! the caller: [BarcodeRender] exposes the resulting module stream and, with
//! the `embedded-graphics` feature, implements `Drawable`.
//!
//! ```
//! use linear_barcode::{Barcode, BarcodeConfig, Symbology, SymbolKind};
//!
//! let config = BarcodeConfig::new().set_dpi(203);
//! let mut barcode = Barcode::with_config(Symbology::from_name("code128bac"), config);
//! let symbols = barcode.generate("A1234");
//!
//! let texts: Vec<&str> = symbols.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(texts, ["START B", "A", "CODE C", "12", "34", "95", "STOP"]);
//! assert_eq!(symbols.symbols()[0].kind, SymbolKind::Control);
//! assert_eq!(barcode.min_width(), 6 * 11 + 13);
//! ```
//!
//! Input is never rejected. Each symbology validates its input by repairing
//! it (dropping, padding or blanking characters) and [Barcode::encoded_value]
//! reports what was actually encoded.

pub mod buffer;
pub mod dimensions;
pub mod encoder;
pub mod error;
pub mod helpers;
pub mod pattern;
pub mod render;
pub mod symbologies;
pub mod symbology;
pub mod tables;
pub mod validate;

pub use buffer::{EncodingBuffer, Symbol, SymbolKind};
pub use dimensions::{BarcodeConfig, Dimensions, HumanReadable, TextAlignment, TextPosition, WideRatio};
pub use encoder::{AnyEncoder, Barcode, Encoder, Payload};
pub use error::BarcodeError;
pub use pattern::{Module, ModuleKind, Pattern};
pub use render::BarcodeRender;
pub use symbology::{Family, Symbology};
pub use validate::validate;
