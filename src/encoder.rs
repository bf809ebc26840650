//! The encoder contract and the [Barcode] front that drives it.

use crate::buffer::EncodingBuffer;
use crate::dimensions::{BarcodeConfig, Dimensions, WideRatio};
use crate::render::BarcodeRender;
use crate::symbologies::{Code128, Code39, EanUpc, Interleaved2of5};
use crate::symbology::{Family, Symbology};
use crate::validate;

/// What an encoder reports besides the symbols it appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    /// The value actually encoded, check digits included.
    pub value: String,
    /// Human readable text printed left of the bars (EAN/UPC only).
    pub prefix: String,
    /// Human readable text printed right of the bars (EAN/UPC only).
    pub suffix: String,
    /// The same data as a ZPL `^BC` field, subset switches included. Only
    /// Code 128 fills it.
    pub zpl: String,
}

impl Payload {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Default::default() }
    }

    pub fn with_labels(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn with_zpl(mut self, zpl: impl Into<String>) -> Self {
        self.zpl = zpl.into();
        self
    }
}

pub trait Encoder {
    fn symbology(&self) -> Symbology;

    fn validate(&self, raw: &str) -> String {
        validate::validate(self.symbology(), raw)
    }

    /// Appends the symbols of an already validated `value` to `buffer`.
    /// An empty value appends nothing.
    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload;
}

/// One encoder per family, selected from a [Symbology].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEncoder {
    Code128(Code128),
    Code39(Code39),
    Interleaved2of5(Interleaved2of5),
    EanUpc(EanUpc),
}

impl AnyEncoder {
    pub fn new(symbology: Symbology, ratio: WideRatio) -> Self {
        match symbology.family() {
            Family::Code128 => AnyEncoder::Code128(Code128::new(symbology)),
            Family::Code39 => AnyEncoder::Code39(Code39::new(symbology, ratio)),
            Family::Interleaved2of5 => AnyEncoder::Interleaved2of5(Interleaved2of5::new(symbology, ratio)),
            Family::EanUpc => AnyEncoder::EanUpc(EanUpc::new(symbology)),
        }
    }
}

impl Encoder for AnyEncoder {
    fn symbology(&self) -> Symbology {
        match self {
            AnyEncoder::Code128(e) => e.symbology(),
            AnyEncoder::Code39(e) => e.symbology(),
            AnyEncoder::Interleaved2of5(e) => e.symbology(),
            AnyEncoder::EanUpc(e) => e.symbology(),
        }
    }

    fn encode(&self, value: &str, buffer: &mut EncodingBuffer) -> Payload {
        match self {
            AnyEncoder::Code128(e) => e.encode(value, buffer),
            AnyEncoder::Code39(e) => e.encode(value, buffer),
            AnyEncoder::Interleaved2of5(e) => e.encode(value, buffer),
            AnyEncoder::EanUpc(e) => e.encode(value, buffer),
        }
    }
}

/// A symbology, its configuration and the result of the last
/// [Barcode::generate] call.
///
/// ```
/// use linear_barcode::{Barcode, Symbology};
///
/// let mut barcode = Barcode::new(Symbology::Ean13);
/// barcode.generate("400638133393");
/// assert_eq!(barcode.encoded_value(), "4006381333931");
/// assert_eq!(barcode.min_width(), 95);
/// ```
#[derive(Debug, Clone)]
pub struct Barcode {
    config: BarcodeConfig,
    encoder: AnyEncoder,
    buffer: EncodingBuffer,
    payload: Payload,
    dimensions: Dimensions,
}

impl Barcode {
    pub fn new(symbology: Symbology) -> Self {
        Self::with_config(symbology, BarcodeConfig::default())
    }

    pub fn with_config(symbology: Symbology, config: BarcodeConfig) -> Self {
        Self {
            encoder: AnyEncoder::new(symbology, config.wide_ratio()),
            config,
            buffer: EncodingBuffer::new(),
            payload: Payload::default(),
            dimensions: Dimensions::default(),
        }
    }

    /// Replaces the configuration. Takes effect on the next
    /// [Barcode::generate] call.
    pub fn set_config(&mut self, config: BarcodeConfig) {
        self.encoder = AnyEncoder::new(self.symbology(), config.wide_ratio());
        self.config = config;
    }

    /// Validates `raw`, encodes it from scratch and settles the dimensions.
    pub fn generate(&mut self, raw: &str) -> &EncodingBuffer {
        let value = self.encoder.validate(raw);

        self.buffer.clear();
        self.payload = self.encoder.encode(&value, &mut self.buffer);
        self.dimensions = Dimensions::resolve(&self.config, self.buffer.min_width());

        tracing::debug!(
            symbology = %self.symbology(),
            input_len = raw.len(),
            symbols = self.buffer.len(),
            min_width = self.buffer.min_width(),
            "barcode generated"
        );

        &self.buffer
    }

    #[inline]
    pub fn symbology(&self) -> Symbology {
        self.encoder.symbology()
    }

    pub fn config(&self) -> &BarcodeConfig {
        &self.config
    }

    pub fn buffer(&self) -> &EncodingBuffer {
        &self.buffer
    }

    /// Width in narrow units, excluding quiet zones.
    pub fn min_width(&self) -> u32 {
        self.buffer.min_width()
    }

    /// The string actually encoded, after validation and check digits.
    pub fn encoded_value(&self) -> &str {
        &self.payload.value
    }

    pub fn prefix(&self) -> &str {
        &self.payload.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.payload.suffix
    }

    /// Field data for a ZPL printer, empty unless the symbology is Code 128.
    pub fn zpl(&self) -> &str {
        &self.payload.zpl
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Module stream view scaled by the resolved X-dimension.
    pub fn render(&self) -> BarcodeRender<'_> {
        let quiet_zone = if self.config.quiet_zone() { self.symbology().quiet_zone() } else { 0 };
        let scale = u16::try_from(self.dimensions.x_dimension).unwrap_or(u16::MAX);
        BarcodeRender::new(&self.buffer)
            .set_scale(scale)
            .set_quiet_zone(quiet_zone)
    }
}
