//! Symbology presets: which field each barcode format corrects errors in

use crate::reed_solomon::error::{RsError, RsResult};
use crate::reed_solomon::field::Field;
use crate::reed_solomon::{galois, modulus};
use std::fmt;
use std::str::FromStr;

/// A barcode format (or Aztec word size) with a fixed error-correction field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    QrCode,
    DataMatrix,
    /// Aztec mode message, 4-bit words
    AztecParam,
    AztecData6,
    AztecData8,
    AztecData10,
    AztecData12,
    MaxiCode,
    Pdf417,
}

impl Symbology {
    pub const ALL: [Symbology; 9] = [
        Symbology::QrCode,
        Symbology::DataMatrix,
        Symbology::AztecParam,
        Symbology::AztecData6,
        Symbology::AztecData8,
        Symbology::AztecData10,
        Symbology::AztecData12,
        Symbology::MaxiCode,
        Symbology::Pdf417,
    ];

    /// The shared field instance this symbology's codewords live in
    pub fn field(self) -> &'static dyn Field {
        match self {
            Symbology::QrCode => galois::qr_code_field_256(),
            Symbology::DataMatrix => galois::data_matrix_field_256(),
            Symbology::AztecParam => galois::aztec_param(),
            Symbology::AztecData6 => galois::aztec_data_6(),
            Symbology::AztecData8 => galois::aztec_data_8(),
            Symbology::AztecData10 => galois::aztec_data_10(),
            Symbology::AztecData12 => galois::aztec_data_12(),
            Symbology::MaxiCode => galois::maxicode_field_64(),
            Symbology::Pdf417 => modulus::pdf417(),
        }
    }

    /// Aztec layer word size in bits to its codeword field
    pub fn aztec_for_word_size(word_size: u32) -> RsResult<Self> {
        match word_size {
            4 => Ok(Symbology::AztecParam),
            6 => Ok(Symbology::AztecData6),
            8 => Ok(Symbology::AztecData8),
            10 => Ok(Symbology::AztecData10),
            12 => Ok(Symbology::AztecData12),
            _ => Err(RsError::invalid(format!(
                "unsupported Aztec word size {word_size}"
            ))),
        }
    }

    /// Whether codewords fit in a byte, so hex input makes sense
    pub fn is_byte_oriented(self) -> bool {
        self.field().size() == 256
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbology::QrCode => "qr",
            Symbology::DataMatrix => "datamatrix",
            Symbology::AztecParam => "aztec-param",
            Symbology::AztecData6 => "aztec6",
            Symbology::AztecData8 => "aztec8",
            Symbology::AztecData10 => "aztec10",
            Symbology::AztecData12 => "aztec12",
            Symbology::MaxiCode => "maxicode",
            Symbology::Pdf417 => "pdf417",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = RsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "qrcode" | "qr-code" => return Ok(Symbology::QrCode),
            "data-matrix" => return Ok(Symbology::DataMatrix),
            _ => {}
        }
        Symbology::ALL
            .into_iter()
            .find(|symbology| symbology.name() == wanted)
            .ok_or_else(|| RsError::invalid(format!("unknown symbology '{s}'")))
    }
}
