use crate::core::io::traits::TextFile;
use crate::core::models::builder::GraphModelBuilder;
use crate::core::models::graph::{GraphModel, ValidationError};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

const COMMENT_PREFIX: char = 'c';
const PARAMETER_PREFIX: char = 'p';

/// A parsed graph description: the run label and the validated model.
///
/// The label is only used to name output artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    pub label: String,
    pub model: GraphModel,
}

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: GraphParseErrorKind },
    #[error("Missing parameter line: expected 'p <label> <num-spins> <num-weights>'")]
    MissingParameterLine,
    #[error("Invalid graph: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphParseErrorKind {
    #[error("Parameter line must have a label, a number of spins and a number of weights")]
    IncompleteParameterLine,
    #[error("Only one parameter line is allowed")]
    DuplicateParameterLine,
    #[error("Weight line found before the parameter line")]
    DataBeforeParameterLine,
    #[error("Weight line must have exactly 3 fields (u v weight), found {found}")]
    WrongFieldCount { found: usize },
    #[error("Invalid integer for {field} (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<T, GraphFileError> {
    value.parse().map_err(|_| GraphFileError::Parse {
        line,
        kind: GraphParseErrorKind::InvalidInt {
            field,
            value: value.to_string(),
        },
    })
}

pub struct GraphFile;

impl TextFile for GraphFile {
    type Document = GraphDocument;
    type Error = GraphFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Document, Self::Error> {
        let mut label: Option<String> = None;
        let mut builder: Option<GraphModelBuilder> = None;
        let mut comment_lines = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(COMMENT_PREFIX) {
                comment_lines += 1;
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();

            if line.starts_with(PARAMETER_PREFIX) {
                if builder.is_some() {
                    return Err(GraphFileError::Parse {
                        line: line_num,
                        kind: GraphParseErrorKind::DuplicateParameterLine,
                    });
                }
                if parts.len() < 4 {
                    return Err(GraphFileError::Parse {
                        line: line_num,
                        kind: GraphParseErrorKind::IncompleteParameterLine,
                    });
                }
                let num_spins: usize = parse_field(parts[2], "number of spins", line_num)?;
                let num_weights: usize = parse_field(parts[3], "number of weights", line_num)?;
                label = Some(parts[1].to_string());
                builder = Some(GraphModelBuilder::new(num_spins, num_weights));
                continue;
            }

            let Some(builder) = builder.as_mut() else {
                return Err(GraphFileError::Parse {
                    line: line_num,
                    kind: GraphParseErrorKind::DataBeforeParameterLine,
                });
            };
            if parts.len() != 3 {
                return Err(GraphFileError::Parse {
                    line: line_num,
                    kind: GraphParseErrorKind::WrongFieldCount { found: parts.len() },
                });
            }
            let u: usize = parse_field(parts[0], "spin index u", line_num)?;
            let v: usize = parse_field(parts[1], "spin index v", line_num)?;
            let weight: i64 = parse_field(parts[2], "weight", line_num)?;
            builder.add_term(u, v, weight);
        }

        let (Some(label), Some(builder)) = (label, builder) else {
            return Err(GraphFileError::MissingParameterLine);
        };
        let model = builder.build()?;

        debug!(
            label = %label,
            num_spins = model.num_spins(),
            node_terms = model.node_terms().len(),
            edge_terms = model.edge_terms().len(),
            comment_lines,
            "Parsed graph description."
        );
        Ok(GraphDocument { label, model })
    }

    fn write_to(document: &Self::Document, writer: &mut impl Write) -> Result<(), Self::Error> {
        let model = &document.model;
        writeln!(writer, "c Generated by isingmc")?;
        writeln!(
            writer,
            "p {} {} {}",
            document.label,
            model.num_spins(),
            model.declared_weights()
        )?;
        for node in model.node_terms() {
            writeln!(writer, "{} {} {}", node.spin, node.spin, node.weight)?;
        }
        for edge in model.edge_terms() {
            writeln!(writer, "{} {} {}", edge.u, edge.v, edge.weight)?;
        }
        Ok(())
    }
}
