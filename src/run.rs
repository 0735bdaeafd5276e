use crate::engine::fees::FeeSchedule;
use crate::engine::process::compute_commissions;
use crate::{input, output};

#[derive(Debug)]
pub enum Error {
    /// The operation batch couldn't be parsed.
    Input(input::Error),

    /// The commissions couldn't be written to the output stream.
    Output(std::io::Error),
}

impl From<input::Error> for Error {
    fn from(err: input::Error) -> Self {
        Self::Input(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err)
    }
}

/// Run the whole pipeline: parse the JSON operation batch from the input
/// stream, compute one commission per operation under the given fee
/// schedule, and write them to the output stream, one per line.
pub fn run_with_schedule(
    schedule: &FeeSchedule,
    input_stream: impl std::io::Read,
    output_stream: impl std::io::Write,
) -> Result<(), Error> {
    let operations = input::parse(input_stream)?;
    let commissions = compute_commissions(schedule, &operations);
    output::write(output_stream, &commissions)?;

    Ok(())
}

/// Same as [`run_with_schedule`], under the reference fee schedule.
pub fn run(
    input_stream: impl std::io::Read,
    output_stream: impl std::io::Write,
) -> Result<(), Error> {
    run_with_schedule(&FeeSchedule::default(), input_stream, output_stream)
}
