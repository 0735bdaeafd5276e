// Writes the computed commissions to the given stream, one per line, in
// batch order. Presentation is the only concern here: the amounts arrive
// already formatted to two decimal places.
pub fn write(
    mut output_stream: impl std::io::Write,
    commissions: &[String],
) -> Result<(), std::io::Error> {
    for commission in commissions {
        writeln!(output_stream, "{}", commission)?;
    }

    Ok(())
}
