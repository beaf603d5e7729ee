use crate::commands::{CliError, ShowCmd};
use pathd::builder::{Build, PathBuilder};
use pathd::serializer::PathSerializer;
use pathd::parse_path_with_options;
use std::io::Write;

pub fn show(mut cmd: ShowCmd) -> Result<(), CliError> {
    let path = parse_path_with_options(&cmd.input, &cmd.options)?;

    if cmd.count {
        writeln!(&mut *cmd.output, "subpaths: {}", path.len())?;
        writeln!(&mut *cmd.output, "commands: {}", path.num_commands())?;

        return Ok(());
    }

    for (i, subpath) in path.iter().enumerate() {
        let status = if subpath.is_closed() { "closed" } else { "open" };
        writeln!(&mut *cmd.output, "subpath {} ({}):", i, status)?;

        for cmd_in_path in subpath {
            let mut serializer = PathSerializer::new();
            serializer.push(cmd_in_path);
            writeln!(&mut *cmd.output, "    {}", serializer.build())?;
        }
    }

    Ok(())
}
