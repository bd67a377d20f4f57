//! Input and file helper functions for the CLI.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use cryptnote_core::{check_file_size, MAX_FILE_SIZE};

use crate::constants::SEALED_FILE_EXTENSION;
use crate::errors::CliError;

/// Take the positional argument, or read all of stdin when it is piped.
fn read_arg_or_stdin(value: Option<String>, label: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(format!(
            "No {} provided.\nHint: Pass it as an argument or pipe it via stdin.",
            label
        ))
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Read a plaintext message to seal.
///
/// The text is kept byte for byte, including empty text. Only piped input
/// loses one line terminator (`\n` or `\r\n`), the one `echo` or a heredoc
/// adds.
pub fn read_message(value: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut message = read_arg_or_stdin(None, "message")?;
    strip_line_terminator(&mut message);
    Ok(message)
}

fn strip_line_terminator(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// Read a sealed message (or share link), stripping surrounding whitespace.
pub fn read_wire(value: Option<String>, label: &str) -> anyhow::Result<String> {
    let raw = read_arg_or_stdin(value, label)?;
    let wire = raw.trim();
    if wire.is_empty() {
        return Err(CliError::invalid_input(format!("The {} cannot be empty", label)).into());
    }
    Ok(wire.to_string())
}

/// Resolve the share base URL from the flag, then config.
pub fn resolve_base_url(flag: Option<&str>, configured: &str) -> anyhow::Result<String> {
    let base = flag.unwrap_or(configured).trim();
    if base.is_empty() {
        return Err(CliError::invalid_input(
            "No base URL for the share link.\nHint: Pass --base-url or set [share] base_url in the config file.",
        )
        .into());
    }
    Ok(base.to_string())
}

/// Read a file, reporting a missing path with a hint.
pub fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    open_existing(path)?
        .read_to_end(&mut bytes)
        .map_err(|e| read_error(path, e))?;
    Ok(bytes)
}

/// Read a file for `seal-file`, enforcing [`MAX_FILE_SIZE`] up front.
///
/// The size is checked from metadata before reading, and the read stops one
/// byte past the limit, so an oversized file is never buffered.
pub fn read_sealable_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let file = open_existing(path)?;
    let size = file.metadata().map_err(|e| read_error(path, e))?.len();
    check_file_size(size)?;

    let mut bytes = Vec::new();
    file.take(MAX_FILE_SIZE as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| read_error(path, e))?;
    check_file_size(bytes.len() as u64)?;
    Ok(bytes)
}

fn open_existing(path: &Path) -> anyhow::Result<File> {
    if !path.exists() {
        return Err(CliError::not_found(
            format!("File not found: {}", path.display()),
            "Hint: Check the path and try again.",
        )
        .into());
    }
    File::open(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: io::Error) -> anyhow::Error {
    anyhow::anyhow!("Failed to read {}: {}", path.display(), e)
}

/// Fail if `path` exists and `force` is not set.
pub fn check_destination(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Destination already exists: {}\nHint: Use --output to choose another path or --force to overwrite.",
            path.display()
        ))
        .into());
    }
    Ok(())
}

/// Write `contents` to `path`, refusing to replace an existing file unless `force`.
pub fn write_output(path: &Path, contents: &[u8], force: bool) -> anyhow::Result<()> {
    check_destination(path, force)?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
}

/// Default destination for a sealed file: `<path>.encrypted`.
pub fn sealed_file_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(SEALED_FILE_EXTENSION);
    PathBuf::from(name)
}

/// Safe local file name for a recovered payload.
///
/// Only the final path component of the sealed name is kept, so a payload
/// cannot direct output outside the working directory.
pub fn recovered_file_name(name: &str) -> Option<PathBuf> {
    let normalized = name.replace('\\', "/");
    let file_name = Path::new(&normalized).file_name()?;
    if file_name == "." || file_name == ".." {
        return None;
    }
    Some(PathBuf::from(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_message_keeps_argument_verbatim() {
        assert_eq!(
            read_message(Some("  keep spacing \n\n".to_string())).unwrap(),
            "  keep spacing \n\n"
        );
        assert_eq!(read_message(Some(String::new())).unwrap(), "");
    }

    #[test]
    fn test_strip_line_terminator_removes_one() {
        for (input, expected) in [
            ("a\n\n  \n", "a\n\n  "),
            ("a\r\n", "a"),
            ("a\n\n", "a\n"),
            ("a\r", "a\r"),
            ("a  ", "a  "),
            ("\n", ""),
            ("", ""),
        ] {
            let mut text = input.to_string();
            strip_line_terminator(&mut text);
            assert_eq!(text, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_read_wire_trims() {
        let wire = read_wire(Some("  abc:def \n".to_string()), "message").unwrap();
        assert_eq!(wire, "abc:def");
    }

    #[test]
    fn test_read_wire_rejects_whitespace_only() {
        assert!(read_wire(Some("   ".to_string()), "message").is_err());
    }

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(
            resolve_base_url(Some("https://a.example"), "https://b.example").unwrap(),
            "https://a.example"
        );
        assert_eq!(
            resolve_base_url(None, "https://b.example").unwrap(),
            "https://b.example"
        );
        assert!(resolve_base_url(None, "").is_err());
    }

    #[test]
    fn test_sealed_file_path_appends_extension() {
        let path = sealed_file_path(Path::new("/tmp/report.pdf"));
        assert_eq!(path, PathBuf::from("/tmp/report.pdf.encrypted"));
    }

    #[test]
    fn test_recovered_file_name_strips_directories() {
        assert_eq!(
            recovered_file_name("../../etc/passwd"),
            Some(PathBuf::from("passwd"))
        );
        assert_eq!(
            recovered_file_name("C:\\Users\\me\\notes.txt"),
            Some(PathBuf::from("notes.txt"))
        );
        assert_eq!(recovered_file_name("photo.png"), Some(PathBuf::from("photo.png")));
        assert_eq!(recovered_file_name(".."), None);
        assert_eq!(recovered_file_name(""), None);
    }

    #[test]
    fn test_write_output_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(&path, b"first", false).unwrap();

        assert!(write_output(&path, b"second", false).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        write_output(&path, b"second", true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_read_sealable_file_enforces_limit() {
        let dir = tempfile::tempdir().unwrap();
        let at_limit = dir.path().join("at-limit.bin");
        std::fs::write(&at_limit, vec![7u8; MAX_FILE_SIZE]).unwrap();
        assert_eq!(read_sealable_file(&at_limit).unwrap().len(), MAX_FILE_SIZE);

        let over = dir.path().join("over.bin");
        std::fs::write(&over, vec![7u8; MAX_FILE_SIZE + 1]).unwrap();
        let err = read_sealable_file(&over).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<cryptnote_core::CryptnoteError>(),
            Some(cryptnote_core::CryptnoteError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_read_sealable_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sealable_file(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
