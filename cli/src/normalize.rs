use crate::commands::{CliError, NormalizeCmd};
use pathd::parse_path_with_options;
use std::io::Write;

pub fn normalize(mut cmd: NormalizeCmd) -> Result<(), CliError> {
    let path = parse_path_with_options(&cmd.input, &cmd.options)?;

    log::info!(
        "{} sub-paths, {} commands",
        path.len(),
        path.num_commands()
    );

    writeln!(&mut *cmd.output, "{}", path)?;

    Ok(())
}
