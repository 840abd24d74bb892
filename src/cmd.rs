use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::process::{Command, Stdio};

/// Execute a command in the project root
///
/// In verbose mode the command's output goes straight to the terminal,
/// otherwise it is captured and stderr is attached to the error on failure.
pub fn execute(ctx: &Context, program: &str, args: &[&str]) -> Result<()> {
    let mut command = Command::new(program);
    command.args(args);
    if !ctx.base_dir.as_os_str().is_empty() {
        command.current_dir(&ctx.base_dir);
    }

    if ctx.verbose {
        let status = command
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::CommandFailed(format!(
                "{} {} failed with exit code: {}",
                program,
                args.join(" "),
                status.code().unwrap_or(-1)
            )));
        }
        return Ok(());
    }

    let output = command.output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::CommandFailed(format!(
            "{} {} failed: {}",
            program,
            args.join(" "),
            stderr.trim_end()
        )));
    }

    Ok(())
}

/// Run every build command in order, stopping at the first failure
pub fn run_build(ctx: &Context, commands: &[String]) -> Result<()> {
    for command in commands {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some((program, args)) = parts.split_first() else {
            continue;
        };

        execute(ctx, program, args)?;
    }

    Ok(())
}
