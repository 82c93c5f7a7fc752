//! Running user-supplied commands through the platform shell

use std::process::Command;

/// Get the appropriate shell command for the current platform
fn get_shell_command() -> (String, Vec<String>) {
    if cfg!(target_os = "windows") {
        return ("cmd".to_owned(), vec!["/C".to_owned()]);
    } else {
        return ("sh".to_owned(), vec!["-c".to_owned()]);
    }
}

/// Build a `Command` that runs `command` through the platform shell
#[must_use]
pub fn shell_command(command: &str) -> Command {
    let (shell, shell_args) = get_shell_command();
    let mut cmd = Command::new(shell);
    cmd.args(shell_args).arg(command);
    cmd
}

/// Solution command used when `--command` is omitted
#[must_use]
pub fn default_solution_command() -> String {
    if cfg!(target_os = "windows") {
        return r".\a.exe".to_owned();
    } else {
        return "./a.out".to_owned();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_runs() {
        let status = shell_command("exit 3").status().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    #[cfg(unix)]
    fn test_default_solution_command() {
        assert_eq!(default_solution_command(), "./a.out");
    }
}
