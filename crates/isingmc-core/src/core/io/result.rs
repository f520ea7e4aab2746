use crate::core::encoding::{self, EncodingError};
use crate::core::io::traits::TextFile;
use crate::core::models::spin::SpinConfiguration;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// The persisted outcome of a run: minimum energy and the encoded spin state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub energy: i64,
    pub state: String,
}

impl ResultRecord {
    /// Encodes `configuration` and pairs it with `energy`.
    pub fn new(energy: i64, configuration: &SpinConfiguration) -> Result<Self, EncodingError> {
        Ok(Self {
            energy,
            state: encoding::encode(configuration)?,
        })
    }

    pub fn configuration(&self) -> Result<SpinConfiguration, EncodingError> {
        encoding::decode(&self.state)
    }
}

/// Conventional artifact name for a run labelled `label`.
pub fn output_file_name(label: &str) -> String {
    format!("output_{}.txt", label)
}

#[derive(Debug, Error)]
pub enum ResultFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Result file is missing line {line} ({what})")]
    MissingLine { line: usize, what: &'static str },
    #[error("Invalid energy value on line 1: '{0}'")]
    InvalidEnergy(String),
    #[error("Invalid spin state on line 2: {0}")]
    Encoding(#[from] EncodingError),
}

/// Two-line artifact: the energy as a decimal integer, then the encoded state.
///
/// No newline follows the state line.
pub struct ResultFile;

impl TextFile for ResultFile {
    type Document = ResultRecord;
    type Error = ResultFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Document, Self::Error> {
        let mut lines = reader.lines();

        let energy_line = lines.next().transpose()?.ok_or(ResultFileError::MissingLine {
            line: 1,
            what: "minimum energy",
        })?;
        let energy_str = energy_line.trim();
        let energy: i64 = energy_str
            .parse()
            .map_err(|_| ResultFileError::InvalidEnergy(energy_str.to_string()))?;

        let state_line = lines.next().transpose()?.ok_or(ResultFileError::MissingLine {
            line: 2,
            what: "spin state",
        })?;
        let state = state_line.trim().to_string();
        encoding::decode(&state)?;

        Ok(ResultRecord { energy, state })
    }

    fn write_to(document: &Self::Document, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", document.energy)?;
        write!(writer, "{}", document.state)?;
        Ok(())
    }
}
