pub mod code128;
pub mod code39;
pub mod ean;
pub mod interleaved;

pub use code128::Code128;
pub use code39::Code39;
pub use ean::EanUpc;
pub use interleaved::Interleaved2of5;
