//! Sample command implementation
//!
//! Prints a standard-normal scalar, vector, or nested matrix.

use std::io::Write;

use ndrand_core::ndarray::parse_dimensions;
use ndrand_core::randn::random_tensor_from_shape;
use tracing::{debug, info};

use crate::Result;

/// Run the sample command, writing the rendered tensor to `out`.
///
/// No dimensions prints a single scalar.
pub fn run<W: Write>(out: &mut W, dims: &[String], precision: usize, pretty: bool) -> Result<()> {
    let shape = parse_dimensions(dims)?;
    debug!(?shape, precision, pretty, "Sampling");

    let tensor = random_tensor_from_shape(&shape)?;

    if pretty {
        writeln!(out, "{:#.*}", precision, tensor)?;
    } else {
        writeln!(out, "{:.*}", precision, tensor)?;
    }

    info!(shape = ?tensor.shape(), "Sample complete");
    Ok(())
}
